//! Serve command

use clap::Args;
use garage_graphql::{run_http_server, server_url, HttpState};

use crate::config::Config;
use crate::AppContext;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Print the resolved address and exit without binding
    #[arg(long)]
    pub check: bool,
}

/// Resolve the bind address: flag or `PORT` env first, then the config file.
/// The config file already falls back to the defaults when a key is unset.
pub fn resolve_addr(args: &ServeArgs, config: &Config) -> (String, u16) {
    let host = args.host.clone().unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);
    (host, port)
}

pub async fn run(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let (host, port) = resolve_addr(args, &ctx.config);

    if args.check {
        println!("{} {}", host, server_url(port));
        return Ok(());
    }

    tracing::debug!(
        "Serving with depth limit {} and complexity limit {}",
        ctx.config.max_depth,
        ctx.config.max_complexity
    );

    let state = HttpState::new(ctx.schema(), ctx.store.clone());
    run_http_server(state, &host, port).await
}
