// data_generation.rs
//
// Synthetic day of traffic: one record per hour with a random volume, road
// condition and weather. Volumes and categories come from two separate
// generators, and only the volume generator is always seeded.

use crate::global_variables::{HOURS_PER_DAY, MAX_TRAFFIC_VOLUME, MIN_TRAFFIC_VOLUME};
use crate::shared_data::{Dataset, HourlyRecord, RoadCondition, Weather};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct DataGenerator {
    volume_rng: StdRng,
    category_rng: StdRng,
}

impl DataGenerator {
    /// `category_seed = None` seeds the condition/weather generator from OS entropy.
    pub fn new(volume_seed: u64, category_seed: Option<u64>) -> Self {
        let category_rng = match category_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            volume_rng: StdRng::seed_from_u64(volume_seed),
            category_rng,
        }
    }

    pub fn generate(&mut self) -> Dataset {
        let volumes: Vec<u32> = (0..HOURS_PER_DAY)
            .map(|_| {
                self.volume_rng
                    .random_range(MIN_TRAFFIC_VOLUME..MAX_TRAFFIC_VOLUME)
            })
            .collect();

        let records: Vec<HourlyRecord> = (0..HOURS_PER_DAY)
            .zip(volumes)
            .map(|(hour, volume)| {
                let road_condition = RoadCondition::ALL
                    [self.category_rng.random_range(0..RoadCondition::ALL.len())];
                let weather = Weather::ALL[self.category_rng.random_range(0..Weather::ALL.len())];
                HourlyRecord {
                    hour,
                    traffic_volume: Some(f64::from(volume)),
                    road_condition,
                    weather,
                }
            })
            .collect();

        log::debug!("Generated {} hourly records", records.len());
        Dataset::from_generated(records)
    }
}

/// Builds the default synthetic dataset for the given seeds.
pub fn generate_simulated_data(volume_seed: u64, category_seed: Option<u64>) -> Dataset {
    DataGenerator::new(volume_seed, category_seed).generate()
}
