#[cfg(feature = "cli")]
pub mod cli;
pub mod loss_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use loss_config::LossConfig;
