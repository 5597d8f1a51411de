use std::time::Duration;

use market_sim::{ConfigError, MarketConfig};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::events::{FeedEvent, OrderSide};
use crate::logging::{SessionLogEvent, SessionLogEventKind, SessionLogWriter};
use crate::session::Session;
use crate::snapshot::SessionSnapshot;

const COMMAND_CHANNEL_CAPACITY: usize = 64;
const FEED_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub enum SessionCommand {
    Buy,
    Sell,
    Reset { config: MarketConfig, seed: u64 },
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClosed;

impl std::fmt::Display for SessionClosed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session loop is no longer running")
    }
}

impl std::error::Error for SessionClosed {}

#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    pub async fn buy(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Buy).await
    }

    pub async fn sell(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Sell).await
    }

    pub async fn reset(&self, config: MarketConfig, seed: u64) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Reset { config, seed }).await
    }

    pub async fn stop(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Stop).await
    }

    async fn send(&self, command: SessionCommand) -> Result<(), SessionClosed> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionClosed)
    }
}

pub struct SessionEngine {
    session: Session,
    commands: mpsc::Receiver<SessionCommand>,
    snapshots: broadcast::Sender<SessionSnapshot>,
    events: broadcast::Sender<FeedEvent>,
}

impl SessionEngine {
    pub fn new(config: MarketConfig, seed: u64) -> Result<(Self, SessionHandle), ConfigError> {
        let session = Session::new(config, seed)?;
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (snapshot_tx, _) = broadcast::channel(FEED_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(FEED_CHANNEL_CAPACITY);

        let engine = Self {
            session,
            commands: command_rx,
            snapshots: snapshot_tx,
            events: event_tx,
        };
        let handle = SessionHandle {
            commands: command_tx,
        };
        Ok((engine, handle))
    }

    pub fn subscribe_snapshots(&self) -> broadcast::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<FeedEvent> {
        self.events.subscribe()
    }

    // The single owner of all session state: ticks and user commands are
    // serviced by one loop, so no two operations ever interleave.
    pub async fn run<L: SessionLogWriter>(mut self, log: &mut L) {
        let mut ticker = self.tick_interval();
        log.write(SessionLogEvent::new(
            self.session.tick(),
            SessionLogEventKind::SessionStarted,
        ));
        self.publish_snapshot();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let price = self.session.advance_tick();
                    let tick = self.session.tick();
                    let _ = self
                        .events
                        .send(FeedEvent::tick(tick, price, self.session.fortune()));
                    log.write(SessionLogEvent::new(tick, SessionLogEventKind::PriceAdvanced));
                    self.publish_snapshot();
                }
                command = self.commands.recv() => match command {
                    Some(SessionCommand::Buy) => self.apply_order(OrderSide::Buy, log),
                    Some(SessionCommand::Sell) => self.apply_order(OrderSide::Sell, log),
                    Some(SessionCommand::Reset { config, seed }) => {
                        match self.session.reset(config, seed) {
                            Ok(()) => {
                                // The old interval dies with the old config;
                                // a pending tick can never fire mid-reset.
                                ticker = self.tick_interval();
                                let tick = self.session.tick();
                                let _ = self.events.send(FeedEvent::session_reset(tick));
                                log.write(SessionLogEvent::new(
                                    tick,
                                    SessionLogEventKind::SessionReset,
                                ));
                                self.publish_snapshot();
                            }
                            Err(_) => {
                                log.write(SessionLogEvent::new(
                                    self.session.tick(),
                                    SessionLogEventKind::ResetRejected,
                                ));
                            }
                        }
                    }
                    Some(SessionCommand::Stop) | None => return,
                },
            }
        }
    }

    fn apply_order<L: SessionLogWriter>(&mut self, side: OrderSide, log: &mut L) {
        let result = match side {
            OrderSide::Buy => self.session.buy().map(|()| None),
            OrderSide::Sell => self.session.sell().map(|outcome| Some(outcome.into())),
        };
        let tick = self.session.tick();

        match result {
            Ok(outcome) => {
                let _ = self
                    .events
                    .send(FeedEvent::fill(tick, side, self.session.price(), outcome));
                log.write(SessionLogEvent::new(tick, SessionLogEventKind::OrderFilled));
                self.publish_snapshot();
            }
            Err(reject) => {
                let _ = self
                    .events
                    .send(FeedEvent::reject(tick, side, reject.to_string()));
                log.write(SessionLogEvent::new(tick, SessionLogEventKind::OrderRejected));
            }
        }
    }

    fn tick_interval(&self) -> Interval {
        let period = Duration::from_millis(self.session.config().update_interval_ms);
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    fn publish_snapshot(&self) {
        let _ = self.snapshots.send(self.session.snapshot());
    }
}
