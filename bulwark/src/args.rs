use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Bulwark error-handling demo server
#[derive(Debug, Parser)]
#[command(name = "bulwark", about = "HTTP server that masks infrastructure errors and logs them")]
pub struct Args {
    /// Path to an optional configuration file
    #[arg(short, long, env = "BULWARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "BULWARK_LISTEN")]
    pub listen: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::try_parse_from(["bulwark"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.listen.is_none());
    }

    #[test]
    fn parses_config_and_listen() {
        let args = Args::try_parse_from(["bulwark", "-c", "bulwark.toml", "--listen", "127.0.0.1:8000"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("bulwark.toml")));
        assert_eq!(args.listen, Some(SocketAddr::from(([127, 0, 0, 1], 8000))));
    }

    #[test]
    fn rejects_bad_listen_address() {
        assert!(Args::try_parse_from(["bulwark", "--listen", "not-an-address"]).is_err());
    }
}
