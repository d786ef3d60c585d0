use audiogate_engine::config::env_flag;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const DEBUG_ENV: &str = "AUDIOGATE_DEBUG";

pub fn init() {
    let level = if env_flag(DEBUG_ENV) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
