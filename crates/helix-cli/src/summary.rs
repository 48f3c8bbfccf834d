use std::path::{Path, PathBuf};

use console::Style;
use helix_core::error::HelixError;
use helix_core::geometry::SpiralPath;
use helix_core::scan::config::ScanConfig;
use helix_core::scan::{ScanResult, StreamStats};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    error: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            error: Style::new().red(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn print_config_section(s: &Styles, config: &ScanConfig) {
    println!("  {}", s.header.apply_to("Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value
            .apply_to(format!("{}x{}", config.viewport.width, config.viewport.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Center"),
        s.value.apply_to(format!(
            "({}, {})",
            config.viewport.width / 2,
            config.viewport.height / 2
        ))
    );
    println!();

    let sampling = &config.sampling;
    println!("  {}", s.header.apply_to("Sampling"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Points"),
        s.value.apply_to(sampling.num_points)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rotations"),
        s.value.apply_to(sampling.rotations)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Growth"),
        s.value.apply_to(sampling.growth_factor)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Radius"),
        s.value.apply_to(format!("{:.4}", sampling.radius_scale))
    );
    println!();
}

fn print_path_section(s: &Styles, path: &SpiralPath) {
    println!("  {}", s.header.apply_to("Spiral Path"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Generated"),
        s.value.apply_to(path.generated())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Retained"),
        s.value.apply_to(format!(
            "{} ({:.1}%)",
            path.len(),
            path.len() as f64 / path.generated().max(1) as f64 * 100.0
        ))
    );
    match (path.radii().first(), path.radii().last()) {
        (Some(first), Some(last)) => println!(
            "    {:<12}{}",
            s.label.apply_to("Depth"),
            s.value.apply_to(format!(
                "{first:.2} .. {last:.2} px (max {:.2})",
                path.max_radius()
            ))
        ),
        _ => println!(
            "    {:<12}{}",
            s.label.apply_to("Depth"),
            s.disabled.apply_to("no samples")
        ),
    }
    println!();
}

pub fn print_path_summary(config: &ScanConfig, path: &SpiralPath) {
    let s = Styles::new();
    print_title(&s, "Helix Geometry");
    print_config_section(&s, config);
    print_path_section(&s, path);
}

fn print_stream_stats(s: &Styles, label: &str, stats: Option<StreamStats>) {
    match stats {
        Some(st) => println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.value.apply_to(format!(
                "min {:.1}  max {:.1}  mean {:.2}",
                st.min, st.max, st.mean
            ))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.disabled.apply_to("empty")
        ),
    }
}

pub fn print_scan_summary(input: &Path, config: &ScanConfig, result: &ScanResult, head: usize) {
    let s = Styles::new();
    print_title(&s, "Helix Scan");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value
            .apply_to(format!("{}x{}", config.viewport.width, config.viewport.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Samples"),
        s.value.apply_to(result.len())
    );
    println!();

    println!("  {}", s.header.apply_to("Streams"));
    print_stream_stats(&s, "Alpha", result.alpha_stats());
    print_stream_stats(&s, "Beta", result.beta_stats());
    match result.correlation() {
        Some(r) => println!(
            "    {:<12}{}",
            s.label.apply_to("Correlation"),
            s.value.apply_to(format!("{r:.4}"))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Correlation"),
            s.disabled.apply_to("undefined")
        ),
    }
    println!();

    if head == 0 || result.is_empty() {
        return;
    }

    // Edge first, matching the plotted depth sweep.
    println!("  {}", s.header.apply_to("Samples (edge \u{2192} center)"));
    println!(
        "    {:>6}  {:>9}  {:>7}  {:>7}",
        s.label.apply_to("Index"),
        s.label.apply_to("Depth"),
        s.label.apply_to("Alpha"),
        s.label.apply_to("Beta")
    );
    for i in (0..result.len()).rev().take(head) {
        println!(
            "    {:>6}  {:>9.2}  {:>7.1}  {:>7.1}",
            i, result.depth_stream[i], result.alpha_stream[i], result.beta_stream[i]
        );
    }
    println!();
}

/// Print one row per file. Returns the number of failed scans.
pub fn print_batch_table(results: &[(PathBuf, Result<ScanResult, HelixError>)]) -> usize {
    let s = Styles::new();
    print_title(&s, "Helix Batch");

    println!(
        "  {:<32}  {:>8}  {:>10}  {:>10}  {:>8}",
        "File", "Samples", "Alpha", "Beta", "Corr"
    );
    println!("  {}", "-".repeat(76));

    let mut failed = 0;
    for (path, result) in results {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match result {
            Ok(r) => {
                let mean = |st: Option<StreamStats>| {
                    st.map(|v| format!("{:.2}", v.mean))
                        .unwrap_or_else(|| "-".into())
                };
                let corr = r
                    .correlation()
                    .map(|c| format!("{c:.3}"))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "  {:<32}  {:>8}  {:>10}  {:>10}  {:>8}",
                    name,
                    r.len(),
                    mean(r.alpha_stats()),
                    mean(r.beta_stats()),
                    corr
                );
            }
            Err(e) => {
                failed += 1;
                println!("  {:<32}  {}", name, s.error.apply_to(e));
            }
        }
    }

    println!();
    println!(
        "  {} scanned, {} failed",
        s.value.apply_to(results.len() - failed),
        s.value.apply_to(failed)
    );
    failed
}
