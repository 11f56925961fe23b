use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Climate and sustainability chat assistant", long_about = None)]
pub struct Args {
    /// Ask a single question and exit (reads stdin when piped and omitted)
    #[arg(short, long)]
    pub question: Option<String>,

    /// Google AI API key; prompted for when missing
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
