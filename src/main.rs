use clap::Parser;
use mdtable_extract::adapters::promote_local_path;
use mdtable_extract::config::resolve_schema;
use mdtable_extract::domain::ports::Pipeline;
use mdtable_extract::utils::{error::ErrorSeverity, logger, validation::Validate};
use mdtable_extract::{
    CliConfig, ExtractEngine, ExtractionPipeline, LocalStorage, RunOutput, TableRecordExtractor,
    UriFetcher,
};
use std::io::Write as _;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mdtable-extract");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let schema = match resolve_schema(config.schema.as_deref()) {
        Ok(schema) => schema,
        Err(e) => {
            tracing::error!("❌ Schema loading failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ExtractionPipeline::new(
        UriFetcher::new(),
        storage,
        config.clone(),
        TableRecordExtractor::new(schema),
    );
    let engine = ExtractEngine::new_with_monitoring(pipeline, config.monitor);

    match &config.uri {
        Some(uri) => run_once(&engine, uri).await,
        None => interactive_loop(&engine).await,
    }
}

async fn run_once<P: Pipeline>(
    engine: &ExtractEngine<P>,
    uri: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let uri = promote_local_path(uri);

    match engine.run(&uri).await {
        Ok(output) => {
            present(&output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn interactive_loop<P: Pipeline>(
    engine: &ExtractEngine<P>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nEntering interactive mode. Type 'exit' at any prompt to quit.");

    loop {
        let input = prompt_uri().await?;

        if input.eq_ignore_ascii_case("exit") {
            println!("Exiting interactive mode.");
            return Ok(());
        }
        if input.is_empty() {
            println!("URI cannot be empty.");
            continue;
        }

        let uri = promote_local_path(&input);
        if uri != input {
            println!("Detected local path, using URI: {}", uri);
        }

        match engine.run(&uri).await {
            Ok(output) => present(&output),
            Err(e) => {
                tracing::error!("❌ Extraction failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }
}

async fn prompt_uri() -> std::io::Result<String> {
    tokio::task::spawn_blocking(|| {
        print!("\nEnter the URI (http:, https:, file:, data:) to convert (or 'exit'): ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    })
    .await
    .map_err(std::io::Error::other)?
}

fn present(output: &RunOutput) {
    match output {
        RunOutput::Json { path, records } => {
            println!("✅ Extracted {} records", records);
            println!("📁 Output saved to: {}", path);
        }
        RunOutput::Markdown(markdown) => {
            println!("No record table found. Raw Markdown output:");
            println!("{}", "-".repeat(20));
            println!("{}", markdown.trim_end());
            println!("{}", "-".repeat(20));
        }
    }
}
