mod config;

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tonlama_ai::GeminiClient;
use tonlama_core::{Analyzer, StopWords, compute_metrics, resolve_conflict};
use tonlama_service::Orchestrator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, GeminiArgs};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("tonlama v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.stopwords {
        let analyzer = Analyzer::new(StopWords::load_or_empty(path));
        if Analyzer::install(analyzer).is_err() {
            warn!(path = %path.display(), "analyzer already initialised; stop-word file ignored");
        }
    }

    match cli.command {
        Command::Serve { gemini, bind } => {
            let orchestrator = orchestrator(&gemini)?;
            tonlama_service::serve(bind, Arc::new(orchestrator)).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Rewrite {
            gemini,
            tone,
            font,
            text,
        } => {
            let text = read_text(text)?;
            let resp = orchestrator(&gemini)?
                .rewrite(&text, tone.as_deref(), font.as_deref())
                .await;
            print_json(&resp)?;
            Ok(if resp.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Classify { gemini, text } => {
            let text = read_text(text)?;
            let resp = orchestrator(&gemini)?.classify(&text).await;
            print_json(&resp)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Score {
            original,
            rewritten,
        } => {
            print_json(&compute_metrics(&original, &rewritten).rounded())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Conflict {
            requested,
            detected,
        } => {
            let warning = resolve_conflict(requested, detected);
            print_json(&serde_json::json!({
                "requested": requested,
                "detected": detected,
                "warning": warning,
            }))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn orchestrator(args: &GeminiArgs) -> anyhow::Result<Orchestrator> {
    let client = Arc::new(GeminiClient::new(args.config()).context("building Gemini client")?);
    Ok(Orchestrator::new(client.clone(), client))
}

/// The positional text, or all of stdin when it is absent.
fn read_text(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading text from stdin")?;
            Ok(input)
        }
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
