use crate::config::Config;
use crate::homebridge::Homebridge;
use crate::hw::PlatformHost;
use crate::message::{Message, SessionEvent};
use crate::probe::{self, Readiness};
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tracing::{error, info, warn};

/// Delay between an unlock event and the readiness probe. USB devices
/// re-enumerate after wake and are briefly absent from the HAL.
const SETTLE_DELAY: Duration = Duration::from_secs(2);

pub struct Engine {
    cfg: Config,
    hb: Homebridge,
    rx: Receiver<Message>,
}

impl Engine {
    pub fn new(cfg: Config, hb: Homebridge, rx: Receiver<Message>) -> Self {
        Self { cfg, hb, rx }
    }

    pub async fn work(&mut self) {
        while let Some(message) = self.rx.recv().await {
            match message {
                Message::Session(SessionEvent::Locked) => {
                    info!("session locked, turning plug off");
                    self.set_plug(false).await;
                }
                Message::Session(SessionEvent::Unlocked) => {
                    info!("session unlocked");
                    tokio::time::sleep(SETTLE_DELAY).await;
                    match probe::check(&PlatformHost, &self.cfg.dac_name, &self.cfg.sample_rate) {
                        Readiness::Ready => {
                            info!("{} ready, turning plug on", self.cfg.dac_name);
                            self.set_plug(true).await;
                        }
                        readiness => {
                            warn!(
                                "{} not ready ({}), leaving plug off",
                                self.cfg.dac_name,
                                readiness.token()
                            );
                        }
                    }
                }
                Message::Quit => {
                    return;
                }
            }
        }
    }

    async fn set_plug(&self, on: bool) {
        if let Err(e) = self.hb.toggle_plug(&self.cfg.plug_device_id, on).await {
            error!("failed to toggle plug: {e}");
        }
    }
}
