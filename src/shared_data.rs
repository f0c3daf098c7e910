// src/shared_data.rs

use crate::error::{Result, TrafficAppError};
use crate::global_variables::{HOURS_PER_DAY, MAX_DATASET_VOLUME};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Road state the user can select. Only Accident and Roadblock change the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoadCondition {
    #[default]
    Clear,
    Accident,
    Roadblock,
    Construction,
}

impl RoadCondition {
    pub const ALL: [RoadCondition; 4] = [
        RoadCondition::Clear,
        RoadCondition::Accident,
        RoadCondition::Roadblock,
        RoadCondition::Construction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadCondition::Clear => "Clear",
            RoadCondition::Accident => "Accident",
            RoadCondition::Roadblock => "Roadblock",
            RoadCondition::Construction => "Construction",
        }
    }
}

impl fmt::Display for RoadCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::Rain, Weather::Fog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rain => "Rain",
            Weather::Fog => "Fog",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region shown next to the prediction. It has no effect on the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    UniversityCampus,
    TechParkRoad,
    HospitalRoad,
    ArchitectureBlock,
    DentalCollege,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::UniversityCampus,
        Region::TechParkRoad,
        Region::HospitalRoad,
        Region::ArchitectureBlock,
        Region::DentalCollege,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UniversityCampus => "University Campus",
            Region::TechParkRoad => "Tech Park Road",
            Region::HospitalRoad => "Hospital Road",
            Region::ArchitectureBlock => "Architecture Block",
            Region::DentalCollege => "Dental College",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current choices, passed by value into every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub region: Region,
    pub road_condition: RoadCondition,
    pub weather: Weather,
}

/// One row of the dataset. `traffic_volume` is `None` only for gaps in an
/// external file, until the preprocessor fills them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub hour: u8,
    pub traffic_volume: Option<f64>,
    pub road_condition: RoadCondition,
    pub weather: Weather,
}

/// Hourly records ordered by hour, with every hour appearing at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<HourlyRecord>,
}

impl Dataset {
    /// Validates and sorts the records.
    pub fn from_records(mut records: Vec<HourlyRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(TrafficAppError::InvalidDataset(
                "dataset has no rows".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for record in &records {
            if record.hour >= HOURS_PER_DAY {
                return Err(TrafficAppError::InvalidDataset(format!(
                    "hour {} is outside 0..{}",
                    record.hour, HOURS_PER_DAY
                )));
            }
            if !seen.insert(record.hour) {
                return Err(TrafficAppError::InvalidDataset(format!(
                    "hour {} appears more than once",
                    record.hour
                )));
            }
            if let Some(volume) = record.traffic_volume {
                if !volume.is_finite() || !(0.0..=MAX_DATASET_VOLUME).contains(&volume) {
                    return Err(TrafficAppError::InvalidDataset(format!(
                        "hour {} has invalid traffic volume {}",
                        record.hour, volume
                    )));
                }
            }
        }

        records.sort_by_key(|r| r.hour);
        Ok(Self { records })
    }

    /// Generator output is already ordered, unique and in range.
    pub(crate) fn from_generated(records: Vec<HourlyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HourlyRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [HourlyRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (hour, volume) pairs for rows that have a volume, in hour order.
    pub fn volume_series(&self) -> Vec<(u8, f64)> {
        self.records
            .iter()
            .filter_map(|r| r.traffic_volume.map(|v| (r.hour, v)))
            .collect()
    }
}
