use clap::Parser;
use climate_chat::app::Application;
use climate_chat::cli::Args;
use climate_chat::commands::create_command_registry;
use climate_chat::config::Config;
use climate_chat::core::error::ChatError;
use climate_chat::display;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run(args: Args) -> Result<(), ChatError> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    config.apply_args(&args);

    let command_dispatcher = create_command_registry();
    let mut app = Application::new(args, config, command_dispatcher);
    app.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::display_error(&e.to_string());
            if e.is_configuration() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
