mod commands;
mod config;
mod render;
mod session;

use std::sync::Arc;

use anyhow::{Context, Result};
use chatpane::{FileStorage, MountHandle, MountOptions, Storage, WidgetHost};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LoggingConfig};
use crate::session::Flow;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    init_logging(&config.logging);

    tracing::info!(storage = %config.storage.dir.display(), target_selector = %config.widget.target, "Starting chatpane");
    if !config.backend.is_configured() {
        tracing::warn!("No backend URL configured; messages will be answered with a configuration error");
    }

    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.storage.dir));
    let mut host = WidgetHost::new(storage).with_target(config.widget.target.clone());

    let options = MountOptions {
        backend_url: config.backend.url.clone(),
    };
    let handle = host
        .mount(&config.widget.target, options)
        .context("Failed to mount widget")?;

    let result = run(&mut host, &handle).await;
    host.unmount(&handle);
    result
}

async fn run(host: &mut WidgetHost, handle: &MountHandle) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (replies_tx, mut replies) = session::reply_channel();

    {
        let widget = host.widget(handle).context("Widget is not mounted")?;
        println!("{}", render::transcript(widget));
    }

    loop {
        tokio::select! {
            Some(outcome) = replies.recv() => {
                let widget = host.widget_mut(handle).context("Widget is not mounted")?;
                session::handle_reply(widget, outcome);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                let widget = host.widget_mut(handle).context("Widget is not mounted")?;
                if session::handle_command(widget, commands::parse(&line), &replies_tx)? == Flow::Quit {
                    break;
                }
            }
        }
    }

    // Let an outstanding reply land before the widget is torn down.
    if let Some(widget) = host.widget_mut(handle) {
        if widget.is_awaiting_reply() {
            if let Some(outcome) = replies.recv().await {
                session::handle_reply(widget, outcome);
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stderr keeps log lines out of the transcript on stdout
    match config.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}
