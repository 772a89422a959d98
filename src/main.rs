use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_jsgen::{cli, run, Options};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli().get_matches();
    let options = Options::from_matches(&matches);
    run(&options)?;
    Ok(())
}
