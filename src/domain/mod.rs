pub mod component_id;
pub mod config;
pub mod error;
pub mod outcome;

pub use component_id::ComponentId;
pub use config::{InstallConfig, StylingStrategy, ThemeConfig};
pub use error::{InstallError, TransformError};
pub use outcome::{InstallOutcome, SkipReason};
