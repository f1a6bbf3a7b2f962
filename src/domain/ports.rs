use crate::domain::model::{ExportResult, RawDocument};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
}

/// Stages of one export run. `ExportEngine` calls them in declaration order.
pub trait Pipeline {
    fn extract(&self) -> Result<RawDocument>;
    fn echo(&self, document: &RawDocument, out: &mut dyn Write) -> Result<()>;
    fn transform(&self, document: &RawDocument) -> Result<ExportResult>;
    fn load(&self, result: &ExportResult, out: &mut dyn Write) -> Result<()>;
}
