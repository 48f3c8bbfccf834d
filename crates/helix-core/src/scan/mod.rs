pub mod config;
mod scanner;
mod types;

pub use scanner::SpiralScanner;
pub use types::{ScanInput, ScanResult, StreamStats};
