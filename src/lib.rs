pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{storage::LocalStorage, CliConfig, DEFAULT_INPUT};
pub use crate::core::{engine::ExportEngine, pipeline::HeaderListPipeline};
pub use domain::model::{ExportResult, HeaderEntry, RawDocument};
pub use utils::error::{ExportError, Result};
