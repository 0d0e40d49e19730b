use std::path::PathBuf;

use clap::Parser;

use version_gate::config::ServerConfig;

#[derive(Parser)]
#[command(name = "version-gate")]
#[command(version, about = "Update-check server: version gate and badge endpoints")]
struct Cli {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(long, default_value = "127.0.0.1", env = "VERSION_GATE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "VERSION_GATE_PORT")]
    port: u16,

    /// Single-line text file holding the latest released version
    #[arg(long, default_value = "version.txt", env = "VERSION_GATE_FILE")]
    version_file: PathBuf,

    /// Homepage the check page redirects to
    #[arg(
        long,
        default_value = "https://example.com/",
        env = "VERSION_GATE_REDIRECT_URL"
    )]
    redirect_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "version_gate=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        version_file: cli.version_file,
        redirect_url: cli.redirect_url,
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(version_gate::server::routes::run_server(config))
}
