use std::collections::VecDeque;

use crate::config::{ConfigError, MarketConfig, NoiseMode};
use crate::noise::{NoiseSource, SeededNoise};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    None,
    Buy,
    Sell,
}

#[derive(Debug, Clone)]
pub struct MarketModel<N = SeededNoise> {
    config: MarketConfig,
    price: f64,
    history: VecDeque<f64>,
    markers: VecDeque<MarkerKind>,
    noise: N,
}

impl MarketModel {
    pub fn new(config: MarketConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_noise(config, SeededNoise::new(seed))
    }
}

impl<N: NoiseSource> MarketModel<N> {
    pub fn with_noise(config: MarketConfig, noise: N) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut model = Self {
            config,
            price: config.initial_price,
            history: VecDeque::with_capacity(config.max_history),
            markers: VecDeque::with_capacity(config.max_history),
            noise,
        };
        model.fill_window();
        Ok(model)
    }

    pub fn advance(&mut self) -> f64 {
        let unit = self.noise.next_unit();
        let mut noise = (unit * 2.0 - 1.0) * self.config.volatility;
        if self.config.noise_mode == NoiseMode::RoundedToInteger {
            noise = noise.round();
        }

        let next = self.price + noise + self.config.trend;
        self.price = if next.is_finite() && next >= self.config.price_floor {
            next
        } else {
            self.config.price_floor
        };

        self.push_sample(self.price);
        self.price
    }

    pub fn mark_last_sample(&mut self, kind: MarkerKind) {
        if let Some(marker) = self.markers.back_mut() {
            *marker = kind;
        }
    }

    pub fn reset(&mut self, config: MarketConfig) -> Result<(), ConfigError> {
        config.validate()?;

        self.config = config;
        self.price = config.initial_price;
        self.history.clear();
        self.markers.clear();
        self.fill_window();
        Ok(())
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    pub fn markers(&self) -> &VecDeque<MarkerKind> {
        &self.markers
    }

    fn fill_window(&mut self) {
        for _ in 0..self.config.max_history {
            self.history.push_back(self.config.initial_price);
            self.markers.push_back(MarkerKind::None);
        }
    }

    fn push_sample(&mut self, price: f64) {
        self.history.push_back(price);
        self.markers.push_back(MarkerKind::None);
        while self.history.len() > self.config.max_history {
            self.history.pop_front();
            self.markers.pop_front();
        }
    }
}
