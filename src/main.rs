use clap::Parser;
use header_export::utils::logger;
use header_export::{CliConfig, ExportEngine, HeaderListPipeline, LocalStorage};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring {} positional argument(s)", config.ignored.len());
    }

    let pipeline = HeaderListPipeline::new(LocalStorage::default(), config);
    let engine = ExportEngine::new(pipeline);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = engine.run(&mut out) {
        // Keep whatever was already echoed; exit() skips destructors.
        let _ = out.flush();
        tracing::error!("Export failed: {} (category: {:?})", e, e.category());
        eprintln!("{}", e.user_friendly_message());
        eprintln!("{}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
