/// Session lock transition as broadcast by the OS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Locked,
    Unlocked,
}

impl SessionEvent {
    /// Fixed output token for consumers reading the watcher's stream.
    pub fn token(&self) -> &'static str {
        match self {
            SessionEvent::Locked => "LOCKED",
            SessionEvent::Unlocked => "UNLOCKED",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    Session(SessionEvent),
    Quit,
}
