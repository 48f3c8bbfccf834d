pub mod consts;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod io;
pub mod render;
pub mod sampler;
pub mod scan;
