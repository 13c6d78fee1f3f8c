use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use saga_dispatch::HttpDispatcher;
use sagad::router::{self, AppState};
use tracing::info;

#[derive(Parser)]
#[command(name = "sagad")]
#[command(about = "Saga coordination service", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = router::DEFAULT_PORT)]
    port: u16,

    /// Timeout applied to every step and compensation call, in seconds
    #[arg(long, default_value_t = 5)]
    call_timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = serve(&cli).await {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn serve(cli: &Cli) -> std::io::Result<()> {
    let state = AppState::new(
        Arc::new(HttpDispatcher::new()),
        Duration::from_secs(cli.call_timeout),
    );
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await?;
    info!(
        port = cli.port,
        call_timeout_secs = cli.call_timeout,
        "listening"
    );
    axum::serve(listener, app).await
}

fn print_error(error: &std::io::Error) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
