use crate::error::{Result, TrafficAppError};
use crate::shared_data::Dataset;
use serde::{Deserialize, Serialize};

/// Straight-line fit of traffic volume against hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrafficModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Predicted volume at `hour`. Hours outside the training range extrapolate.
    pub fn evaluate(&self, hour: f64) -> f64 {
        self.slope * hour + self.intercept
    }
}

/// Ordinary least squares on (hour, traffic_volume). The dataset must be
/// preprocessed first and contain at least two distinct hours.
pub fn train_model(dataset: &Dataset) -> Result<TrafficModel> {
    let mut xs = Vec::with_capacity(dataset.len());
    let mut ys = Vec::with_capacity(dataset.len());
    for record in dataset.records() {
        let volume = record.traffic_volume.ok_or_else(|| {
            TrafficAppError::InvalidDataset(format!(
                "hour {} has no traffic volume; preprocess the data before training",
                record.hour
            ))
        })?;
        xs.push(f64::from(record.hour));
        ys.push(volume);
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return Err(TrafficAppError::InvalidDataset(
            "at least two distinct hours are needed to fit a line".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    log::info!(
        "Trained traffic model on {} rows: volume = {:.3} * hour + {:.3}",
        xs.len(),
        slope,
        intercept
    );
    Ok(TrafficModel { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_data::{HourlyRecord, RoadCondition, Weather};
    use crate::simulation_engine::data_generation::generate_simulated_data;

    fn dataset(points: &[(u8, f64)]) -> Dataset {
        let records = points
            .iter()
            .map(|&(hour, volume)| HourlyRecord {
                hour,
                traffic_volume: Some(volume),
                road_condition: RoadCondition::Clear,
                weather: Weather::Clear,
            })
            .collect();
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn recovers_an_exact_line() {
        let points: Vec<(u8, f64)> = (0..24).map(|h| (h, 3.0 * f64::from(h) + 120.0)).collect();
        let model = train_model(&dataset(&points)).unwrap();
        assert!((model.slope - 3.0).abs() < 1e-9);
        assert!((model.intercept - 120.0).abs() < 1e-9);
        assert!((model.evaluate(30.0) - 210.0).abs() < 1e-9);
    }

    #[test]
    fn beats_the_constant_mean_predictor() {
        let data = generate_simulated_data(0, None);
        let model = train_model(&data).unwrap();
        let series = data.volume_series();
        let mean = series.iter().map(|(_, v)| v).sum::<f64>() / series.len() as f64;

        let fit_error: f64 = series
            .iter()
            .map(|&(h, v)| (model.evaluate(f64::from(h)) - v).powi(2))
            .sum();
        let mean_error: f64 = series.iter().map(|&(_, v)| (mean - v).powi(2)).sum();
        assert!(fit_error <= mean_error);
    }

    #[test]
    fn single_hour_cannot_be_fitted() {
        assert!(matches!(
            train_model(&dataset(&[(4, 200.0)])),
            Err(TrafficAppError::InvalidDataset(_))
        ));
    }

    #[test]
    fn missing_volume_is_rejected() {
        let data = Dataset::from_records(vec![
            HourlyRecord {
                hour: 0,
                traffic_volume: None,
                road_condition: RoadCondition::Clear,
                weather: Weather::Clear,
            },
            HourlyRecord {
                hour: 1,
                traffic_volume: Some(10.0),
                road_condition: RoadCondition::Clear,
                weather: Weather::Clear,
            },
        ])
        .unwrap();
        assert!(train_model(&data).is_err());
    }
}
