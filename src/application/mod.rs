//! Application layer - Use cases and orchestration

pub mod check;
pub mod convert;
pub mod init;
pub mod manage_config;

pub use check::{CheckOutcome, CheckService};
pub use convert::{ConvertOptions, ConvertService, OutputFormat};
pub use manage_config::ConfigService;
