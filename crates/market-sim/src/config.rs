use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseMode {
    Continuous,
    RoundedToInteger,
}

impl NoiseMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "continuous" => Some(Self::Continuous),
            "rounded" => Some(Self::RoundedToInteger),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::RoundedToInteger => "rounded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConfig {
    pub initial_cash: f64,
    pub initial_price: f64,
    pub volatility: f64,
    pub trend: f64,
    pub update_interval_ms: u64,
    pub max_history: usize,
    pub price_floor: f64,
    pub noise_mode: NoiseMode,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            initial_cash: 1_000.0,
            initial_price: 100.0,
            volatility: 2.0,
            trend: -0.5,
            update_interval_ms: 500,
            max_history: 50,
            price_floor: 0.01,
            noise_mode: NoiseMode::Continuous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidInitialCash,
    InvalidInitialPrice,
    InvalidVolatility,
    InvalidTrend,
    InvalidUpdateInterval,
    InvalidMaxHistory,
    InvalidPriceFloor,
    PriceFloorAboveInitialPrice,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialCash => {
                write!(f, "initial_cash must be a finite number greater than zero")
            }
            Self::InvalidInitialPrice => {
                write!(f, "initial_price must be a finite number greater than zero")
            }
            Self::InvalidVolatility => {
                write!(f, "volatility must be a finite non-negative number")
            }
            Self::InvalidTrend => {
                write!(f, "trend must be a finite number")
            }
            Self::InvalidUpdateInterval => {
                write!(f, "update_interval_ms must be greater than zero")
            }
            Self::InvalidMaxHistory => {
                write!(f, "max_history must be greater than zero")
            }
            Self::InvalidPriceFloor => {
                write!(f, "price_floor must be a finite number greater than zero")
            }
            Self::PriceFloorAboveInitialPrice => {
                write!(f, "price_floor must not exceed initial_price")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl MarketConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_cash.is_finite() || self.initial_cash <= 0.0 {
            return Err(ConfigError::InvalidInitialCash);
        }
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(ConfigError::InvalidInitialPrice);
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(ConfigError::InvalidVolatility);
        }
        if !self.trend.is_finite() {
            return Err(ConfigError::InvalidTrend);
        }
        if self.update_interval_ms == 0 {
            return Err(ConfigError::InvalidUpdateInterval);
        }
        if self.max_history == 0 {
            return Err(ConfigError::InvalidMaxHistory);
        }
        if !self.price_floor.is_finite() || self.price_floor <= 0.0 {
            return Err(ConfigError::InvalidPriceFloor);
        }
        if self.price_floor > self.initial_price {
            return Err(ConfigError::PriceFloorAboveInitialPrice);
        }

        Ok(())
    }
}
