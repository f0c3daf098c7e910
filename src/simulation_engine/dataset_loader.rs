// dataset_loader.rs
//
// Reads and writes datasets as CSV with the columns
// hour,traffic_volume,road_condition,weather. An empty traffic_volume cell is
// a missing value.

use crate::error::{Result, TrafficAppError};
use crate::shared_data::{Dataset, HourlyRecord};
use crate::simulation_engine::data_generation::generate_simulated_data;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 4] = ["hour", "traffic_volume", "road_condition", "weather"];

/// Loads the CSV at `file_path` when given, otherwise generates the synthetic day.
pub fn load_data(
    file_path: Option<&Path>,
    volume_seed: u64,
    category_seed: Option<u64>,
) -> Result<Dataset> {
    match file_path {
        Some(path) => {
            log::info!("Loading traffic data from {}", path.display());
            load_dataset_csv(path)
        }
        None => {
            log::info!("Generating simulated traffic data (volume seed {})", volume_seed);
            Ok(generate_simulated_data(volume_seed, category_seed))
        }
    }
}

pub fn load_dataset_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TrafficAppError::InvalidDataset(format!(
                "{} is missing required column '{}'",
                path.display(),
                column
            )));
        }
    }

    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<HourlyRecord>().enumerate() {
        // +2: one for the header line, one for 1-based numbering.
        let record = result.map_err(|e| {
            TrafficAppError::InvalidDataset(format!(
                "{} line {}: {}",
                path.display(),
                index + 2,
                e
            ))
        })?;
        records.push(record);
    }
    log::debug!("Read {} rows from {}", records.len(), path.display());

    Dataset::from_records(records)
}

pub fn write_dataset_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    for record in dataset.records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    log::info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_data::{RoadCondition, Weather};
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_rows_and_missing_volumes() {
        let path = temp_csv(
            "traffic_loader_rows.csv",
            "hour,traffic_volume,road_condition,weather\n\
             1,250,Accident,Rain\n\
             0,,Clear,Fog\n",
        );
        let dataset = load_dataset_csv(&path).unwrap();
        let records = dataset.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hour, 0);
        assert_eq!(records[0].traffic_volume, None);
        assert_eq!(records[0].weather, Weather::Fog);
        assert_eq!(records[1].traffic_volume, Some(250.0));
        assert_eq!(records[1].road_condition, RoadCondition::Accident);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn columns_may_come_in_any_order() {
        let path = temp_csv(
            "traffic_loader_order.csv",
            "weather, hour, road_condition, traffic_volume\nRain, 3, Construction, 410\n",
        );
        let dataset = load_dataset_csv(&path).unwrap();
        assert_eq!(dataset.records()[0].hour, 3);
        assert_eq!(dataset.records()[0].traffic_volume, Some(410.0));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_column_is_invalid() {
        let path = temp_csv(
            "traffic_loader_missing_column.csv",
            "hour,traffic_volume,road_condition\n0,100,Clear\n",
        );
        let err = load_dataset_csv(&path).unwrap_err();
        assert!(err.to_string().contains("weather"), "{err}");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unknown_category_is_invalid() {
        let path = temp_csv(
            "traffic_loader_bad_category.csv",
            "hour,traffic_volume,road_condition,weather\n0,100,Flooded,Clear\n",
        );
        assert!(matches!(
            load_dataset_csv(&path),
            Err(TrafficAppError::InvalidDataset(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn header_only_file_is_invalid() {
        let path = temp_csv(
            "traffic_loader_empty.csv",
            "hour,traffic_volume,road_condition,weather\n",
        );
        assert!(matches!(
            load_dataset_csv(&path),
            Err(TrafficAppError::InvalidDataset(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn written_file_loads_back() {
        let path = std::env::temp_dir().join("traffic_loader_export.csv");
        let dataset = generate_simulated_data(0, Some(5));
        write_dataset_csv(&dataset, &path).unwrap();
        assert_eq!(load_dataset_csv(&path).unwrap(), dataset);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn no_path_uses_the_generator() {
        let dataset = load_data(None, 0, None).unwrap();
        assert_eq!(dataset.len(), 24);
    }
}
