use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOutcome {
    Win,
    Loss,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeReject {
    InsufficientCash,
    NoOpenPosition,
    InvalidPrice,
}

impl fmt::Display for TradeReject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCash => {
                write!(f, "insufficient cash for one share at the current price")
            }
            Self::NoOpenPosition => {
                write!(f, "no open position to sell")
            }
            Self::InvalidPrice => {
                write!(f, "trade price must be a finite number greater than zero")
            }
        }
    }
}

impl std::error::Error for TradeReject {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ledger {
    cash: f64,
    shares: u64,
    avg_buy_price: f64,
}

impl Ledger {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            shares: 0,
            avg_buy_price: 0.0,
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn shares(&self) -> u64 {
        self.shares
    }

    pub fn avg_buy_price(&self) -> f64 {
        self.avg_buy_price
    }

    pub fn buy(&mut self, price: f64) -> Result<(), TradeReject> {
        validate_price(price)?;
        if self.cash < price {
            return Err(TradeReject::InsufficientCash);
        }

        // Running weighted average over total cost; no trade history needed.
        let total_cost = self.shares as f64 * self.avg_buy_price + price;
        self.cash -= price;
        self.shares += 1;
        self.avg_buy_price = total_cost / self.shares as f64;
        Ok(())
    }

    pub fn sell(&mut self, price: f64) -> Result<TradeOutcome, TradeReject> {
        validate_price(price)?;
        if self.shares == 0 {
            return Err(TradeReject::NoOpenPosition);
        }

        let profit = price - self.avg_buy_price;
        self.cash += price;
        self.shares -= 1;
        if self.shares == 0 {
            self.avg_buy_price = 0.0;
        }

        Ok(if profit > 0.0 {
            TradeOutcome::Win
        } else if profit < 0.0 {
            TradeOutcome::Loss
        } else {
            TradeOutcome::Flat
        })
    }

    pub fn fortune(&self, price: f64) -> f64 {
        self.cash + self.shares as f64 * price
    }
}

fn validate_price(price: f64) -> Result<(), TradeReject> {
    if !price.is_finite() || price <= 0.0 {
        return Err(TradeReject::InvalidPrice);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Ledger, TradeOutcome, TradeReject};

    #[test]
    fn fresh_ledger_is_flat_with_starting_cash() {
        let ledger = Ledger::new(1_000.0);

        assert_eq!(ledger.cash(), 1_000.0);
        assert_eq!(ledger.shares(), 0);
        assert_eq!(ledger.avg_buy_price(), 0.0);
    }

    #[test]
    fn buy_moves_cash_into_a_position_at_cost() {
        let mut ledger = Ledger::new(1_000.0);

        ledger.buy(100.0).unwrap();

        assert_eq!(ledger.cash(), 900.0);
        assert_eq!(ledger.shares(), 1);
        assert_eq!(ledger.avg_buy_price(), 100.0);
    }

    #[test]
    fn second_buy_reweights_the_cost_basis() {
        let mut ledger = Ledger::new(1_000.0);
        ledger.buy(100.0).unwrap();

        ledger.buy(110.0).unwrap();

        assert_eq!(ledger.cash(), 790.0);
        assert_eq!(ledger.shares(), 2);
        assert_eq!(ledger.avg_buy_price(), 105.0);
    }

    #[test]
    fn profitable_sell_reports_win_and_keeps_cost_basis_while_open() {
        let mut ledger = Ledger::new(1_000.0);
        ledger.buy(100.0).unwrap();
        ledger.buy(110.0).unwrap();

        let outcome = ledger.sell(130.0).unwrap();

        assert_eq!(outcome, TradeOutcome::Win);
        assert_eq!(ledger.cash(), 920.0);
        assert_eq!(ledger.shares(), 1);
        assert_eq!(ledger.avg_buy_price(), 105.0);
    }

    #[test]
    fn selling_the_last_share_clears_the_cost_basis() {
        let mut ledger = Ledger::new(1_000.0);
        ledger.buy(100.0).unwrap();

        let outcome = ledger.sell(90.0).unwrap();

        assert_eq!(outcome, TradeOutcome::Loss);
        assert_eq!(ledger.shares(), 0);
        assert_eq!(ledger.avg_buy_price(), 0.0);
    }

    #[test]
    fn sell_at_cost_basis_is_flat() {
        let mut ledger = Ledger::new(1_000.0);
        ledger.buy(100.0).unwrap();

        assert_eq!(ledger.sell(100.0).unwrap(), TradeOutcome::Flat);
    }

    #[test]
    fn buy_with_insufficient_cash_leaves_state_unchanged() {
        let mut ledger = Ledger::new(50.0);
        let before = ledger;

        assert_eq!(ledger.buy(100.0), Err(TradeReject::InsufficientCash));
        assert_eq!(ledger, before);
    }

    #[test]
    fn buy_succeeds_when_cash_exactly_covers_the_price() {
        let mut ledger = Ledger::new(100.0);

        ledger.buy(100.0).unwrap();

        assert_eq!(ledger.cash(), 0.0);
        assert_eq!(ledger.shares(), 1);
    }

    #[test]
    fn sell_with_no_position_leaves_state_unchanged() {
        let mut ledger = Ledger::new(1_000.0);
        let before = ledger;

        assert_eq!(ledger.sell(100.0), Err(TradeReject::NoOpenPosition));
        assert_eq!(ledger, before);
    }

    #[test]
    fn trades_reject_non_finite_or_non_positive_prices() {
        let mut ledger = Ledger::new(1_000.0);
        ledger.buy(100.0).unwrap();
        let before = ledger;

        assert_eq!(ledger.buy(f64::NAN), Err(TradeReject::InvalidPrice));
        assert_eq!(ledger.buy(0.0), Err(TradeReject::InvalidPrice));
        assert_eq!(ledger.sell(f64::INFINITY), Err(TradeReject::InvalidPrice));
        assert_eq!(ledger.sell(-1.0), Err(TradeReject::InvalidPrice));
        assert_eq!(ledger, before);
    }

    #[test]
    fn flat_position_always_has_zero_cost_basis() {
        let mut ledger = Ledger::new(10_000.0);

        for round in 1..=5 {
            let price = 90.0 + round as f64;
            ledger.buy(price).unwrap();
            ledger.buy(price + 2.0).unwrap();
            ledger.sell(price + 5.0).unwrap();
            ledger.sell(price - 5.0).unwrap();

            assert_eq!(ledger.shares(), 0);
            assert_eq!(ledger.avg_buy_price(), 0.0);
        }
    }

    #[test]
    fn fortune_marks_holdings_to_the_given_price() {
        let mut ledger = Ledger::new(1_000.0);
        ledger.buy(100.0).unwrap();
        ledger.buy(110.0).unwrap();

        assert_eq!(ledger.fortune(120.0), 790.0 + 240.0);
    }

    #[test]
    fn cost_basis_stays_stable_over_many_trades() {
        let mut ledger = Ledger::new(1_000_000.0);

        for _ in 0..10_000 {
            ledger.buy(100.0).unwrap();
        }

        assert!((ledger.avg_buy_price() - 100.0).abs() < 1e-6);
        assert_eq!(ledger.shares(), 10_000);
    }
}
