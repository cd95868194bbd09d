use anyhow::Context;
use lodge_cli::{demo, Config, NoticeWriter};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load config")?;

    // Logs go to stderr so stdout only carries notices
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(format = ?config.output.format, "running hotel walkthrough");

    let stdout = io::stdout();
    let mut notices = NoticeWriter::new(stdout.lock(), config.output.format);
    let hotel = demo::run(&mut notices).context("failed to write notices")?;

    tracing::info!(rooms = hotel.len(), "walkthrough finished");
    Ok(())
}
