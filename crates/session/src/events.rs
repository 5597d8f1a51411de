use portfolio::TradeOutcome;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SellOutcome {
    Win,
    Loss,
    Flat,
}

impl From<TradeOutcome> for SellOutcome {
    fn from(outcome: TradeOutcome) -> Self {
        match outcome {
            TradeOutcome::Win => Self::Win,
            TradeOutcome::Loss => Self::Loss,
            TradeOutcome::Flat => Self::Flat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum FeedEvent {
    Tick {
        tick: u64,
        price: f64,
        fortune: f64,
    },
    Fill {
        tick: u64,
        side: OrderSide,
        price: f64,
        outcome: Option<SellOutcome>,
    },
    Reject {
        tick: u64,
        side: OrderSide,
        reason: String,
    },
    SessionReset {
        tick: u64,
    },
}

impl FeedEvent {
    pub fn tick(tick: u64, price: f64, fortune: f64) -> Self {
        Self::Tick {
            tick,
            price,
            fortune,
        }
    }

    pub fn fill(tick: u64, side: OrderSide, price: f64, outcome: Option<SellOutcome>) -> Self {
        Self::Fill {
            tick,
            side,
            price,
            outcome,
        }
    }

    pub fn reject(tick: u64, side: OrderSide, reason: impl Into<String>) -> Self {
        Self::Reject {
            tick,
            side,
            reason: reason.into(),
        }
    }

    pub fn session_reset(tick: u64) -> Self {
        Self::SessionReset { tick }
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedEvent, OrderSide, SellOutcome};

    #[test]
    fn fill_event_is_tagged_for_collaborators() {
        let event = FeedEvent::fill(9, OrderSide::Sell, 130.0, Some(SellOutcome::Win));

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "fill");
        assert_eq!(json["side"], "sell");
        assert_eq!(json["outcome"], "win");
    }

    #[test]
    fn buy_fill_carries_no_outcome() {
        let event = FeedEvent::fill(2, OrderSide::Buy, 100.0, None);

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "fill");
        assert_eq!(json["outcome"], serde_json::Value::Null);
    }

    #[test]
    fn reject_event_carries_a_readable_reason() {
        let event = FeedEvent::reject(4, OrderSide::Buy, "insufficient cash");

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "reject");
        assert_eq!(json["reason"], "insufficient cash");
    }
}
