use anyhow::Context;
use clap::Parser;
use tonnage_variance::utils::logger;
use tonnage_variance::utils::str_parser::{parse_str_file, segment_count};

#[derive(Parser)]
#[command(name = "pit-report")]
#[command(about = "Summarize the strings in a Surpac .str pit design file")]
struct Args {
    /// Path to the .str design file
    #[arg(short, long, default_value = "pit_design.str")]
    file: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    std::fs::metadata(&args.file)
        .with_context(|| format!("STR file not found at {}", args.file))?;

    let strings = parse_str_file(&args.file);
    if strings.is_empty() {
        anyhow::bail!("Failed to read coordinates from {}", args.file);
    }

    println!("📐 {}: {} string(s)", args.file, strings.len());

    let mut ids: Vec<i32> = strings.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        let points = &strings[&id];
        let coords: Vec<(f64, f64, f64)> = points.iter().filter_map(|p| *p).collect();

        let min_x = coords.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = coords.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = coords.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = coords.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        println!(
            "  string {}: {} point(s), {} segment(s), X {:.1}..{:.1}, Y {:.1}..{:.1}",
            id,
            coords.len(),
            segment_count(points),
            min_x,
            max_x,
            min_y,
            max_y
        );
    }

    Ok(())
}
