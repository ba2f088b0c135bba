use todo_panel::{config_from_args, Host, UreqTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the drawn panel.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_panel=info,todo_panel_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config_from_args(std::env::args().skip(1))?;
    tracing::info!(url = %config.api.request_url(), delete_check = ?config.delete_check, "starting panel");

    let mut host = Host::new(&config, UreqTransport::new());
    let stdin = std::io::stdin();
    host.run(stdin.lock(), std::io::stdout().lock())?;
    Ok(())
}
