use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use vsm_server::load_app;
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Corpus file or directory of .txt files
    #[arg(long, default_value = "collection-100.txt")]
    corpus: PathBuf,
    /// Stopword file replacing the built-in English list
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let app: Router = load_app(&args.corpus, args.stopwords.as_deref())?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
