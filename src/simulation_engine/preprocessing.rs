use crate::error::{Result, TrafficAppError};
use crate::shared_data::Dataset;

/// Fills missing traffic volumes with the mean of the volumes that are present.
/// Other columns are left untouched, and a dataset without gaps comes back as is.
pub fn preprocess_data(mut dataset: Dataset) -> Result<Dataset> {
    let present: Vec<f64> = dataset
        .records()
        .iter()
        .filter_map(|r| r.traffic_volume)
        .collect();
    let missing = dataset.len() - present.len();
    if missing == 0 {
        return Ok(dataset);
    }
    if present.is_empty() {
        return Err(TrafficAppError::InvalidDataset(
            "no traffic volumes to compute a fill value from".to_string(),
        ));
    }

    let mean = present.iter().sum::<f64>() / present.len() as f64;
    for record in dataset.records_mut() {
        if record.traffic_volume.is_none() {
            record.traffic_volume = Some(mean);
        }
    }
    log::info!(
        "Filled {} missing traffic volume(s) with column mean {:.2}",
        missing,
        mean
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_data::{HourlyRecord, RoadCondition, Weather};

    fn dataset(volumes: &[Option<f64>]) -> Dataset {
        let records = volumes
            .iter()
            .enumerate()
            .map(|(hour, &traffic_volume)| HourlyRecord {
                hour: hour as u8,
                traffic_volume,
                road_condition: RoadCondition::Roadblock,
                weather: Weather::Fog,
            })
            .collect();
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn gaps_take_the_mean_of_present_values() {
        let filled = preprocess_data(dataset(&[Some(100.0), None, Some(300.0), None])).unwrap();
        let volumes: Vec<Option<f64>> = filled.records().iter().map(|r| r.traffic_volume).collect();
        assert_eq!(
            volumes,
            vec![Some(100.0), Some(200.0), Some(300.0), Some(200.0)]
        );
        assert!(filled
            .records()
            .iter()
            .all(|r| r.road_condition == RoadCondition::Roadblock && r.weather == Weather::Fog));
    }

    #[test]
    fn complete_dataset_is_unchanged() {
        let original = dataset(&[Some(150.0), Some(250.0)]);
        assert_eq!(preprocess_data(original.clone()).unwrap(), original);
    }

    #[test]
    fn filling_twice_changes_nothing() {
        let once = preprocess_data(dataset(&[Some(10.0), None, Some(40.0)])).unwrap();
        let twice = preprocess_data(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn all_missing_is_invalid() {
        assert!(matches!(
            preprocess_data(dataset(&[None, None])),
            Err(TrafficAppError::InvalidDataset(_))
        ));
    }
}
