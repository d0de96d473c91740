//! Synthetic demand generation for testing and development.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use ridecast_core::constants::HOURS_PER_DAY;
use ridecast_core::types::{LocationId, PickupHour, TsRecord};

/// Configuration for synthetic demand generation
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Number of pickup locations
    pub num_locations: u32,
    /// First location id
    pub first_location: u32,
    /// First hour of the generated series
    pub start_hour: PickupHour,
    /// Citywide base rate, rides per hour
    pub base_rate: f64,
    /// Daily seasonality amplitude (fraction of base rate)
    pub daily_amplitude: f64,
    /// Weekend uplift (fraction of base rate)
    pub weekly_amplitude: f64,
    /// Std dev of additive Gaussian noise, in rides
    pub noise_std: f64,
    /// Max relative spread of per-location busyness factors
    pub location_spread: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            num_locations: 10,
            first_location: 1,
            start_hour: PickupHour::from_hours(473_352), // 2024-01-01 00:00 UTC
            base_rate: 40.0,
            daily_amplitude: 0.6,
            weekly_amplitude: 0.25,
            noise_std: 4.0,
            location_spread: 0.8,
        }
    }
}

impl SyntheticConfig {
    /// Config resembling a handful of busy midtown zones
    #[must_use]
    pub fn midtown() -> Self {
        Self {
            num_locations: 5,
            base_rate: 120.0,
            daily_amplitude: 0.7,
            noise_std: 10.0,
            ..Default::default()
        }
    }

    /// Low-volume outer-borough profile
    #[must_use]
    pub fn outer_borough() -> Self {
        Self {
            num_locations: 20,
            base_rate: 8.0,
            daily_amplitude: 0.4,
            noise_std: 2.0,
            ..Default::default()
        }
    }
}

/// Seeded generator of per-location hourly ride counts.
///
/// Demand is a base rate scaled by a per-location busyness factor, shaped
/// by daily and weekly seasonality, with additive Gaussian noise, floored
/// at zero. Deterministic for a fixed seed.
pub struct SyntheticDemand {
    config: SyntheticConfig,
    rng: StdRng,
    location_factors: Vec<f64>,
}

impl SyntheticDemand {
    /// Create a generator with the default seed
    #[must_use]
    pub fn new(config: SyntheticConfig) -> Self {
        Self::with_seed(config, 42)
    }

    /// Create a generator with a specific seed
    #[must_use]
    pub fn with_seed(config: SyntheticConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let location_factors = (0..config.num_locations)
            .map(|_| 1.0 + rng.gen::<f64>() * config.location_spread)
            .collect();
        Self {
            config,
            rng,
            location_factors,
        }
    }

    /// Expected demand for one location index at one hour, before noise
    fn rate(&self, location_idx: usize, hour: PickupHour) -> f64 {
        let cfg = &self.config;
        let hour_of_day = hour.as_hours().rem_euclid(HOURS_PER_DAY) as f64;
        // Evening peak around 19:00
        let phase = (hour_of_day - 19.0) / HOURS_PER_DAY as f64 * std::f64::consts::TAU;
        let daily = 1.0 + cfg.daily_amplitude * phase.cos();

        // Unix epoch was a Thursday; days 2 and 3 of the week are the weekend
        let day_of_week = hour.as_hours().div_euclid(HOURS_PER_DAY).rem_euclid(7);
        let weekly = if day_of_week == 2 || day_of_week == 3 {
            1.0 + cfg.weekly_amplitude
        } else {
            1.0
        };

        cfg.base_rate * self.location_factors[location_idx] * daily * weekly
    }

    /// Generate `hours` consecutive hourly rows for every location,
    /// sorted by `(location, hour)`
    pub fn generate(&mut self, hours: usize) -> Vec<TsRecord> {
        let mut records = Vec::with_capacity(hours * self.config.num_locations as usize);
        let noise = Normal::new(0.0, self.config.noise_std).ok();

        for idx in 0..self.config.num_locations as usize {
            let location = LocationId::new(self.config.first_location + idx as u32);
            for h in 0..hours {
                let hour = self.config.start_hour.add_hours(h as i64);
                let jitter = noise.map_or(0.0, |n| n.sample(&mut self.rng));
                let rides = (self.rate(idx, hour) + jitter).round().max(0.0);
                records.push(TsRecord::new(location, hour, rides as u32));
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let config = SyntheticConfig::default();
        let locations = config.num_locations as usize;
        let mut gen = SyntheticDemand::new(config);

        let records = gen.generate(48);
        assert_eq!(records.len(), 48 * locations);

        // one row per location per hour, sorted
        assert!(records.windows(2).all(|w| w[0].key() < w[1].key()));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let r1 = SyntheticDemand::with_seed(SyntheticConfig::default(), 123).generate(24);
        let r2 = SyntheticDemand::with_seed(SyntheticConfig::default(), 123).generate(24);
        assert_eq!(r1, r2);

        let r3 = SyntheticDemand::with_seed(SyntheticConfig::default(), 124).generate(24);
        assert_ne!(r1, r3);
    }

    #[test]
    fn test_daily_peak() {
        let config = SyntheticConfig {
            num_locations: 1,
            noise_std: 0.0,
            weekly_amplitude: 0.0,
            ..Default::default()
        };
        let mut gen = SyntheticDemand::with_seed(config, 1);
        let day = gen.generate(24);

        let peak = day.iter().max_by_key(|r| r.rides).unwrap();
        let trough = day.iter().min_by_key(|r| r.rides).unwrap();
        assert_eq!(peak.hour.as_hours().rem_euclid(24), 19);
        assert!(peak.rides > trough.rides);
    }
}
