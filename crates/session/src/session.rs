use market_sim::{ConfigError, MarkerKind, MarketConfig, MarketModel};
use portfolio::{Ledger, TradeOutcome, TradeReject};

use crate::snapshot::SessionSnapshot;

#[derive(Debug, Clone)]
pub struct Session {
    market: MarketModel,
    ledger: Ledger,
    tick: u64,
}

impl Session {
    pub fn new(config: MarketConfig, seed: u64) -> Result<Self, ConfigError> {
        let market = MarketModel::new(config, seed)?;
        let ledger = Ledger::new(config.initial_cash);

        Ok(Self {
            market,
            ledger,
            tick: 0,
        })
    }

    pub fn advance_tick(&mut self) -> f64 {
        self.tick += 1;
        self.market.advance()
    }

    pub fn buy(&mut self) -> Result<(), TradeReject> {
        self.ledger.buy(self.market.price())?;
        self.market.mark_last_sample(MarkerKind::Buy);
        Ok(())
    }

    pub fn sell(&mut self) -> Result<TradeOutcome, TradeReject> {
        let outcome = self.ledger.sell(self.market.price())?;
        self.market.mark_last_sample(MarkerKind::Sell);
        Ok(outcome)
    }

    pub fn reset(&mut self, config: MarketConfig, seed: u64) -> Result<(), ConfigError> {
        *self = Self::new(config, seed)?;
        Ok(())
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn price(&self) -> f64 {
        self.market.price()
    }

    pub fn fortune(&self) -> f64 {
        self.ledger.fortune(self.market.price())
    }

    pub fn config(&self) -> &MarketConfig {
        self.market.config()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tick: self.tick,
            price: self.market.price(),
            cash: self.ledger.cash(),
            shares: self.ledger.shares(),
            avg_buy_price: self.ledger.avg_buy_price(),
            fortune: self.fortune(),
            history: self.market.history().iter().copied().collect(),
            markers: self.market.markers().iter().map(|&m| m.into()).collect(),
        }
    }
}
