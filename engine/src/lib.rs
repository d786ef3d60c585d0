pub mod config;
mod engine;
pub mod homebridge;
pub mod hw;
pub mod message;
pub mod probe;
pub mod relay;

use homebridge::Homebridge;
use message::{Message, SessionEvent};
use tokio::sync::mpsc::{Sender, channel};
use tokio::task::JoinHandle;

/// Wire up the session event source and spawn the engine loop.
///
/// Lock/unlock broadcasts from the OS are forwarded into the engine channel
/// until the engine receives `Message::Quit` or every sender is dropped.
pub fn init(cfg: config::Config) -> Result<(Sender<Message>, JoinHandle<()>), String> {
    let hb = Homebridge::new(&cfg.base_url, &cfg.username, &cfg.password)?;
    let (tx, rx) = channel::<Message>(32);
    let (session_tx, mut session_rx) = channel::<SessionEvent>(32);
    hw::lockscreen::subscribe(session_tx);
    let forward = tx.clone();
    tokio::spawn(async move {
        while let Some(event) = session_rx.recv().await {
            if forward.send(Message::Session(event)).await.is_err() {
                return;
            }
        }
    });
    let mut engine = engine::Engine::new(cfg, hb, rx);
    let handle = tokio::spawn(async move {
        engine.work().await;
    });
    Ok((tx, handle))
}
