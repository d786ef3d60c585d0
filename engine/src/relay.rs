use crate::message::SessionEvent;
use std::io::Write;
use tokio::sync::mpsc::Receiver;

/// Mirror session events as output lines, one token per event, flushing
/// after every line so a consumer reading the stream sees each event without
/// buffering delay. Events are handled in arrival order, one at a time.
/// Returns when the event channel closes or the writer fails.
pub async fn run<W: Write>(rx: &mut Receiver<SessionEvent>, mut out: W) {
    while let Some(event) = rx.recv().await {
        if writeln!(out, "{}", event.token())
            .and_then(|()| out.flush())
            .is_err()
        {
            return;
        }
    }
}
