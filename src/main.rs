use anyhow::Context;
use clap::Parser;
use file_modifier::utils::{logger, validation::Validate};
use file_modifier::{CliConfig, EtlEngine, FileModifierPipeline, InteractiveSession, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("Starting file-modifier");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let pipeline = FileModifierPipeline::new(LocalStorage::new());

    let Some((input_path, output_path)) = config.one_shot() else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut session = InteractiveSession::new(pipeline, stdin.lock(), stdout.lock());
        return session.run().context("interactive session aborted");
    };

    let engine = EtlEngine::new(pipeline);
    match engine.run(input_path, output_path) {
        Ok(summary) => {
            println!(
                "✅ Wrote {} characters to '{}' (read {} from '{}')",
                summary.chars_written, summary.output_path, summary.chars_read, summary.input_path
            );
        }
        Err(e) => {
            tracing::debug!("Processing failed: {} (Kind: {:?})", e, e.kind());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
