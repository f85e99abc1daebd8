use std::io::BufRead;

use clap::Parser;
use tonnage_variance::core::binding::{TextField, VarianceBinding};
use tonnage_variance::core::variance::compute;
use tonnage_variance::domain::model::BreakStatus;
use tonnage_variance::domain::ports::StatusSink;
use tonnage_variance::utils::logger;
use tonnage_variance::CliConfig;

/// Status sink backed by the terminal: text goes to stdout, the color name to
/// the debug log.
struct TerminalStatus;

impl StatusSink for TerminalStatus {
    fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            println!("(enter both expected and actual tonnage)");
        } else {
            println!("{}", text);
        }
    }

    fn set_color(&mut self, color: &str) {
        tracing::debug!("status color: {}", color);
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tonnage-variance");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.interactive {
        run_interactive()
    } else {
        run_once(&config);
        Ok(())
    }
}

fn run_once(config: &CliConfig) {
    let result = compute(
        config.expected.as_deref().unwrap_or(""),
        config.actual.as_deref().unwrap_or(""),
    );

    if result.status == BreakStatus::Unknown {
        println!("No variance: enter both expected and actual tonnage.");
        return;
    }

    println!("{}", result.display_text);
    tracing::info!(
        "variance: {} t (display color: {})",
        result.variance_field(),
        result.display_color.unwrap_or("unchanged")
    );
}

fn run_interactive() -> anyhow::Result<()> {
    let expected = TextField::new("");
    let actual = TextField::new("");

    let Some(mut binding) = VarianceBinding::bind(
        Some(expected.clone()),
        Some(actual.clone()),
        Some(Box::new(TerminalStatus)),
        None,
    ) else {
        anyhow::bail!("variance binding did not activate");
    };

    println!("Enter expected=<value> or actual=<value>, 'quit' to leave.");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let Some((field, value)) = line.split_once('=') else {
            eprintln!("Expected <field>=<value>, got: {}", line);
            continue;
        };

        match field.trim() {
            "expected" => expected.set(value.trim()),
            "actual" => actual.set(value.trim()),
            other => {
                eprintln!("Unknown field: {}", other);
                continue;
            }
        }

        binding.on_input_changed();
    }

    Ok(())
}
