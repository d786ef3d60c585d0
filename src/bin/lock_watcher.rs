use audiogate_engine::hw::lockscreen;
use audiogate_engine::relay;
use tokio::sync::mpsc::channel;

#[tokio::main]
async fn main() {
    let (tx, mut rx) = channel(32);
    lockscreen::subscribe(tx);
    relay::run(&mut rx, std::io::stdout()).await;
}
