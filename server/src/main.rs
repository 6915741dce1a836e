use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod routes;

/// Serves the scribble page and its wasm bundle.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding index.html and the built `pkg/`.
    #[arg(long)]
    public_dir: Option<PathBuf>,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

impl Args {
    fn public_dir(&self) -> PathBuf {
        self.public_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"))
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let public_dir = args.public_dir();
    if !public_dir.join("index.html").is_file() {
        tracing::warn!(dir = %public_dir.display(), "index.html not found in public dir");
    }

    let app = routes::app(&public_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        dir = %public_dir.display(),
        "Scribble running at http://localhost:{}",
        args.port
    );
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_3000() {
        let expected = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(3000);
        let Ok(args) = Args::try_parse_from(["scribble_server"]) else {
            panic!("no flags should parse");
        };
        assert_eq!(args.port, expected);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "scribble_server",
            "--port",
            "8080",
            "--public-dir",
            "/srv/www",
        ]);
        let Ok(args) = args else {
            panic!("flags should parse");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.public_dir(), PathBuf::from("/srv/www"));
    }

    #[test]
    fn public_dir_defaults_next_to_crate() {
        let Ok(args) = Args::try_parse_from(["scribble_server"]) else {
            panic!("no flags should parse");
        };
        assert!(args.public_dir().ends_with("public"));
    }

    #[test]
    fn bad_port_is_rejected() {
        assert!(Args::try_parse_from(["scribble_server", "--port", "not-a-port"]).is_err());
    }
}
