use std::{env, fmt, str::FromStr};

use market_sim::{MarketConfig, NoiseMode};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_TICK_COUNT: u64 = 20;
const DEFAULT_JOURNAL_OUTPUT_PATH: &str = "artifacts/journal.csv";

const INITIAL_CASH_KEY: &str = "TICKER_INITIAL_CASH";
const INITIAL_PRICE_KEY: &str = "TICKER_INITIAL_PRICE";
const VOLATILITY_KEY: &str = "TICKER_VOLATILITY";
const TREND_KEY: &str = "TICKER_TREND";
const UPDATE_INTERVAL_KEY: &str = "TICKER_UPDATE_INTERVAL_MS";
const MAX_HISTORY_KEY: &str = "TICKER_MAX_HISTORY";
const PRICE_FLOOR_KEY: &str = "TICKER_PRICE_FLOOR";
const NOISE_MODE_KEY: &str = "TICKER_NOISE_MODE";
const SEED_KEY: &str = "TICKER_SEED";
const TICK_COUNT_KEY: &str = "TICKER_TICKS";
const JOURNAL_OUTPUT_KEY: &str = "TICKER_JOURNAL_OUTPUT";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub market: MarketConfig,
    pub seed: u64,
    pub ticks: u64,
    pub journal_output_path: String,
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
    InvalidNoiseMode,
    InvalidSeed,
    InvalidTickCount,
    InvalidJournalOutputPath,
    NonUnicodeValue { key: &'static str },
    RejectedMarketConfig(market_sim::ConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialCash => {
                write!(f, "{INITIAL_CASH_KEY} must be a number")
            }
            Self::InvalidInitialPrice => {
                write!(f, "{INITIAL_PRICE_KEY} must be a number")
            }
            Self::InvalidVolatility => {
                write!(f, "{VOLATILITY_KEY} must be a number")
            }
            Self::InvalidTrend => {
                write!(f, "{TREND_KEY} must be a number")
            }
            Self::InvalidUpdateInterval => {
                write!(f, "{UPDATE_INTERVAL_KEY} must be a non-negative integer")
            }
            Self::InvalidMaxHistory => {
                write!(f, "{MAX_HISTORY_KEY} must be a non-negative integer")
            }
            Self::InvalidPriceFloor => {
                write!(f, "{PRICE_FLOOR_KEY} must be a number")
            }
            Self::InvalidNoiseMode => {
                write!(f, "{NOISE_MODE_KEY} must be one of: continuous, rounded")
            }
            Self::InvalidSeed => {
                write!(f, "{SEED_KEY} must be a non-negative integer")
            }
            Self::InvalidTickCount => {
                write!(f, "{TICK_COUNT_KEY} must be a non-negative integer")
            }
            Self::InvalidJournalOutputPath => {
                write!(f, "{JOURNAL_OUTPUT_KEY} must not be empty or whitespace")
            }
            Self::NonUnicodeValue { key } => {
                write!(f, "{key} contains non-unicode data")
            }
            Self::RejectedMarketConfig(err) => {
                write!(f, "market configuration rejected: {err}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RejectedMarketConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = MarketConfig::default();

        let market = MarketConfig {
            initial_cash: parse_env(
                INITIAL_CASH_KEY,
                defaults.initial_cash,
                ConfigError::InvalidInitialCash,
            )?,
            initial_price: parse_env(
                INITIAL_PRICE_KEY,
                defaults.initial_price,
                ConfigError::InvalidInitialPrice,
            )?,
            volatility: parse_env(
                VOLATILITY_KEY,
                defaults.volatility,
                ConfigError::InvalidVolatility,
            )?,
            trend: parse_env(TREND_KEY, defaults.trend, ConfigError::InvalidTrend)?,
            update_interval_ms: parse_env(
                UPDATE_INTERVAL_KEY,
                defaults.update_interval_ms,
                ConfigError::InvalidUpdateInterval,
            )?,
            max_history: parse_env(
                MAX_HISTORY_KEY,
                defaults.max_history,
                ConfigError::InvalidMaxHistory,
            )?,
            price_floor: parse_env(
                PRICE_FLOOR_KEY,
                defaults.price_floor,
                ConfigError::InvalidPriceFloor,
            )?,
            noise_mode: parse_noise_mode_env()?,
        };
        market
            .validate()
            .map_err(ConfigError::RejectedMarketConfig)?;

        let seed = parse_env(SEED_KEY, DEFAULT_SEED, ConfigError::InvalidSeed)?;
        let ticks = parse_env(TICK_COUNT_KEY, DEFAULT_TICK_COUNT, ConfigError::InvalidTickCount)?;
        let journal_output_path = parse_journal_output_env()?;

        Ok(Self {
            market,
            seed,
            ticks,
            journal_output_path,
        })
    }
}

fn parse_env<T: FromStr>(
    key: &'static str,
    default_value: T,
    invalid_error: ConfigError,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| invalid_error),
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicodeValue { key }),
    }
}

fn parse_noise_mode_env() -> Result<NoiseMode, ConfigError> {
    match env::var(NOISE_MODE_KEY) {
        Ok(value) => NoiseMode::parse(value.trim()).ok_or(ConfigError::InvalidNoiseMode),
        Err(env::VarError::NotPresent) => Ok(NoiseMode::Continuous),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicodeValue {
            key: NOISE_MODE_KEY,
        }),
    }
}

fn parse_journal_output_env() -> Result<String, ConfigError> {
    match env::var(JOURNAL_OUTPUT_KEY) {
        Ok(value) => {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidJournalOutputPath);
            }
            Ok(value)
        }
        Err(env::VarError::NotPresent) => Ok(DEFAULT_JOURNAL_OUTPUT_PATH.to_owned()),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicodeValue {
            key: JOURNAL_OUTPUT_KEY,
        }),
    }
}
