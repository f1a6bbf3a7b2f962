pub mod storage;

use crate::domain::ports::ConfigProvider;
use std::ffi::OsString;
use std::path::Path;

/// Input file, resolved against the working directory.
pub const DEFAULT_INPUT: &str = "example-response-headers.json";

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "header-export"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Print the `key` of every entry in example-response-headers.json")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs on stderr as JSON lines"))]
    pub json_logs: bool,

    /// Positional arguments are accepted and ignored.
    #[cfg_attr(feature = "cli", arg(hide = true))]
    pub ignored: Vec<OsString>,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        Path::new(DEFAULT_INPUT)
    }
}
