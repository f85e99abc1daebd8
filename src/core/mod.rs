pub mod binding;
pub mod forecast;
pub mod loss;
pub mod progress;
pub mod report;
pub mod variance;

pub use crate::domain::model::{BreakStatus, VarianceResult};
pub use crate::domain::ports::{FieldSource, StatusSink, VarianceSink};
pub use crate::utils::error::Result;
