use crate::core::{ExportResult, Pipeline};
use crate::utils::error::Result;
use std::io::Write;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs read, echo, parse/project and emit in that order. The echo is
    /// written before parsing, so it is present even when parsing fails.
    pub fn run(&self, out: &mut dyn Write) -> Result<ExportResult> {
        tracing::info!("Starting header export");

        let document = self.pipeline.extract()?;
        tracing::debug!("Loaded {}", document.path.display());

        self.pipeline.echo(&document, out)?;

        let result = self.pipeline.transform(&document)?;
        tracing::info!("Exporting {} header keys", result.entries.len());

        self.pipeline.load(&result, out)?;

        Ok(result)
    }
}
