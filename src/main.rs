//! Agrimed CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agrimed::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => agrimed::cli::commands::init::execute(force, cli.json),
        Commands::Ask { question, domain } => {
            agrimed::cli::commands::ask::execute(question, domain, cli.config.as_deref(), cli.json)
                .await
        }
        Commands::Chat { domain } => {
            agrimed::cli::commands::chat::execute(domain, cli.config.as_deref(), cli.json).await
        }
        Commands::Domains => {
            agrimed::cli::commands::domains::execute(cli.config.as_deref(), cli.json)
        }
    };

    if let Err(err) = result {
        agrimed::cli::handle_error(&err, cli.json);
    }
}
