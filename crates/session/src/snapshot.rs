use market_sim::MarkerKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMarker {
    None,
    Buy,
    Sell,
}

impl SampleMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl From<MarkerKind> for SampleMarker {
    fn from(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::None => Self::None,
            MarkerKind::Buy => Self::Buy,
            MarkerKind::Sell => Self::Sell,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub price: f64,
    pub cash: f64,
    pub shares: u64,
    pub avg_buy_price: f64,
    pub fortune: f64,
    pub history: Vec<f64>,
    pub markers: Vec<SampleMarker>,
}
