use anyhow::Context;
use brl_server::{BondServer, ServerConfig};
use brl_store::InMemoryKvStore;

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }

    // The embedded in-memory backend stands in for the external store; a
    // production deployment swaps in its own KvStore implementation.
    let server = BondServer::new(config, InMemoryKvStore::new());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?
        .block_on(server.serve())
        .context("running server")
}
