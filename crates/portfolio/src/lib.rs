mod ledger;

pub use ledger::{Ledger, TradeOutcome, TradeReject};
