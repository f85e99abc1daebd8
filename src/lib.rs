pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::LossConfig;

pub use crate::core::binding::{TextField, VarianceBinding};
pub use crate::core::variance::compute;
pub use crate::domain::model::{BreakStatus, VarianceResult};
pub use crate::utils::error::{Result, TonnageError};
