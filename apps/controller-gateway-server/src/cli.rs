use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Controller gateway with proxy-forwarded certificate header authentication.
#[derive(Debug, Parser)]
#[command(name = "controller-gateway", version, about)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(short, long, env = "CONTROLLER_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, overriding `server.bind_addr`.
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}
