#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLogEventKind {
    SessionStarted,
    PriceAdvanced,
    OrderFilled,
    OrderRejected,
    SessionReset,
    ResetRejected,
    JournalWritten,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLogEvent {
    pub tick: u64,
    pub kind: SessionLogEventKind,
}

impl SessionLogEvent {
    pub fn new(tick: u64, kind: SessionLogEventKind) -> Self {
        Self { tick, kind }
    }
}

pub trait SessionLogWriter {
    fn write(&mut self, event: SessionLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemorySessionLogWriter {
    events: Vec<SessionLogEvent>,
}

impl InMemorySessionLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SessionLogEvent] {
        &self.events
    }
}

impl SessionLogWriter for InMemorySessionLogWriter {
    fn write(&mut self, event: SessionLogEvent) {
        self.events.push(event);
    }
}
