mod config;
mod market;
mod noise;

pub use config::{ConfigError, MarketConfig, NoiseMode};
pub use market::{MarkerKind, MarketModel};
pub use noise::{NoiseSource, SeededNoise};
