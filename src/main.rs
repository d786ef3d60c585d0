use audiogate_engine::config::Config;
use audiogate_engine::message::Message;
use tracing::{error, info};

mod configure;
mod logging;

#[tokio::main]
async fn main() {
    if std::env::args().nth(1).as_deref() == Some("configure") {
        if let Err(e) = configure::run().await {
            eprintln!("Configuration failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    logging::init();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            error!("run `audiogate configure` to create a configuration");
            std::process::exit(1);
        }
    };

    let (tx, handle) = match audiogate_engine::init(cfg) {
        Ok(started) => started,
        Err(e) => {
            error!("failed to start engine: {e}");
            std::process::exit(1);
        }
    };

    info!("audiogate running");
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
    let _ = tx.send(Message::Quit).await;
    let _ = handle.await;
}
