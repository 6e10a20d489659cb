//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tonlama_ai::GeminiConfig;
use tonlama_ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use tonlama_core::ToneLabel;

#[derive(Parser, Debug)]
#[command(
    name = "tonlama",
    about = "Rewrite Turkish text into a target tone and score the result",
    version
)]
pub struct Cli {
    /// Newline-delimited stop-word file replacing the built-in Turkish list
    #[arg(long, env = "TONLAMA_STOPWORDS", global = true)]
    pub stopwords: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve POST /classify and POST /rewrite
    Serve {
        #[command(flatten)]
        gemini: GeminiArgs,
        #[arg(long, env = "TONLAMA_BIND", default_value = "127.0.0.1:5000")]
        bind: SocketAddr,
    },
    /// Rewrite text (argument or stdin) into a tone
    Rewrite {
        #[command(flatten)]
        gemini: GeminiArgs,
        /// Target tone, English or Turkish name (default: neutral)
        #[arg(long)]
        tone: Option<String>,
        /// Style hint passed to the model
        #[arg(long)]
        font: Option<String>,
        text: Option<String>,
    },
    /// Detect the tone of text (argument or stdin)
    Classify {
        #[command(flatten)]
        gemini: GeminiArgs,
        text: Option<String>,
    },
    /// Similarity and readability of a rewrite, offline
    Score { original: String, rewritten: String },
    /// Conflict warning for a requested/detected tone pair, offline
    Conflict {
        requested: ToneLabel,
        detected: ToneLabel,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GeminiArgs {
    #[arg(long = "api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[arg(long, env = "TONLAMA_GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[arg(long, env = "TONLAMA_REWRITE_MODEL", default_value = DEFAULT_MODEL)]
    pub rewrite_model: String,
    #[arg(long, env = "TONLAMA_CLASSIFY_MODEL", default_value = DEFAULT_MODEL)]
    pub classify_model: String,
    #[arg(long, env = "TONLAMA_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl GeminiArgs {
    pub fn config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            rewrite_model: self.rewrite_model.clone(),
            classify_model: self.classify_model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
