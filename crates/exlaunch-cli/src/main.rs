//! run-lua: send one command to a console running exlaunch
//!
//! Usage: `IP=<console address> run-lua '<command>'`
//!
//! The console's reply content is printed to stdout. Diagnostics go to
//! stderr and are controlled by `RUST_LOG`.

mod invocation;
mod output;

use anyhow::{Result, bail};
use exlaunch_bridge::ConsoleClient;
use invocation::{Invocation, USAGE};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().collect();
    let (config, command) = match invocation::plan(&args, |name| std::env::var(name).ok())? {
        Invocation::Send { config, command } => (config, command),
        // A missing console address is an operator problem, not a failure
        Invocation::Unconfigured(message) => {
            println!("{}", message);
            return Ok(());
        }
        Invocation::Usage => bail!(USAGE),
    };

    let client = ConsoleClient::new(config);
    let frame = client.send(&command).await?;
    debug!(
        "success={} declared_length={} content_len={}",
        frame.is_success(),
        frame.declared_length(),
        frame.content().len()
    );

    output::print_response(&frame, &mut std::io::stdout().lock())?;
    Ok(())
}
