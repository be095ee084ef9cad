use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use refreshable::cli::Cli;
use refreshable::fetch::SimulatedFetch;
use refreshable::logging::init_tracing;
use refreshable::shutdown::ShutdownHandle;
use refreshable::ui::refresh::refresh_store;
use refreshable::ui::vanilla::ViewModel;
use refreshable::ui::{AppSelection, Session};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(
        app = ?config.session.app,
        strategy = ?config.refresh.strategy,
        latency_ms = config.fetch.latency_ms,
        "Starting session"
    );

    let shutdown = ShutdownHandle::new();
    shutdown.listen_for_signals();

    let fetcher = SimulatedFetch::new(config.fetch.latency());
    let strategy = config.refresh.strategy;
    let mut stdout = io::stdout().lock();

    let state = match config.session.app {
        AppSelection::Vanilla => {
            Session::new(ViewModel::new(fetcher), strategy)
                .run(&cli.actions, &mut stdout, &shutdown)
                .await?
        }
        AppSelection::Reducer => {
            Session::new(refresh_store(fetcher), strategy)
                .run(&cli.actions, &mut stdout, &shutdown)
                .await?
        }
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&state).context("Failed to encode state")?;
        writeln!(stdout, "{}", json)?;
    }
    stdout.flush()?;
    Ok(())
}
