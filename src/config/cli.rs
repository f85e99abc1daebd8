use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tonnage-variance")]
#[command(about = "Overbreak/underbreak variance check for production entry")]
pub struct CliConfig {
    /// Expected tonnage, as typed into the form field
    #[arg(long)]
    pub expected: Option<String>,

    /// Actual tonnage, as typed into the form field
    #[arg(long)]
    pub actual: Option<String>,

    /// Read expected=<value> / actual=<value> lines from stdin and recompute
    /// after every change
    #[arg(long)]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
