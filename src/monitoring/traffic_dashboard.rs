use crate::config::AppConfig;
use crate::error::Result;
use crate::flow_analyzer::{predict_for_selection, train_model, TrafficModel, TrafficPrediction};
use crate::global_variables::HOURS_PER_DAY;
use crate::monitoring::traffic_charts::{
    load_map_image, render_map_view, render_traffic_graph, MapView,
};
use crate::shared_data::{Dataset, Region, RoadCondition, Selection, Weather};
use crate::simulation_engine::dataset_loader::load_data;
use crate::simulation_engine::preprocessing::preprocess_data;
use chrono::Timelike;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// One interactive session: the dataset and model built at startup plus the
/// user's current choices.
pub struct TrafficApp {
    config: AppConfig,
    dataset: Dataset,
    model: TrafficModel,
    map: MapView,
    selection: Selection,
    hour_override: Option<u8>,
    last_prediction: Option<TrafficPrediction>,
}

impl TrafficApp {
    /// Loads data, trains the model and loads the map named in `config`.
    pub fn start(config: AppConfig) -> Result<Self> {
        let dataset = load_data(
            config.data_file.as_deref(),
            config.volume_seed,
            config.category_seed,
        )?;
        let map = load_map_image(&config.map_image)?;
        Self::new(config, dataset, map)
    }

    pub fn new(config: AppConfig, dataset: Dataset, map: MapView) -> Result<Self> {
        let dataset = preprocess_data(dataset)?;
        let model = train_model(&dataset)?;
        Ok(Self {
            config,
            dataset,
            model,
            map,
            selection: Selection::default(),
            hour_override: None,
            last_prediction: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn model(&self) -> &TrafficModel {
        &self.model
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Fixes the hour used for predictions; `None` goes back to the wall clock.
    pub fn set_hour(&mut self, hour: Option<u8>) {
        self.hour_override = hour;
    }

    pub fn current_hour(&self) -> u8 {
        self.hour_override.unwrap_or_else(local_hour)
    }

    pub fn predict(&mut self) -> &TrafficPrediction {
        let prediction = predict_for_selection(&self.model, self.current_hour(), self.selection);
        self.last_prediction.insert(prediction)
    }

    pub fn result_text(&self) -> String {
        match &self.last_prediction {
            Some(prediction) => prediction.result_text(),
            None => "Predicted Traffic Volume: -".to_string(),
        }
    }

    pub fn suggestion_text(&self) -> &str {
        self.last_prediction
            .as_ref()
            .map(|p| p.suggestion)
            .unwrap_or("")
    }

    pub fn show_graph(&self) -> Result<PathBuf> {
        render_traffic_graph(&self.dataset, &self.config.graph_output)?;
        Ok(self.config.graph_output.clone())
    }

    pub fn show_map(&self) -> Result<PathBuf> {
        render_map_view(&self.map, &self.config.map_output)?;
        Ok(self.config.map_output.clone())
    }
}

fn local_hour() -> u8 {
    chrono::Local::now().hour() as u8
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Lists `options` and returns the one picked, or `None` for an invalid choice.
fn choose<R: BufRead, W: Write, T: Copy + std::fmt::Display>(
    input: &mut R,
    output: &mut W,
    title: &str,
    options: &[T],
) -> Result<Option<T>> {
    writeln!(output, "\n{}:", title)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, option)?;
    }
    let Some(answer) = prompt(input, output, "Enter your choice: ")? else {
        return Ok(None);
    };
    let picked = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied());
    if picked.is_none() {
        writeln!(output, "Invalid choice.")?;
    }
    Ok(picked)
}

/// Interactive menu on stdin/stdout.
pub fn run_cli(app: &mut TrafficApp) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_cli_with(app, &mut stdin.lock(), &mut stdout.lock())
}

/// Menu loop over any reader/writer. Ends on the exit option or end of input.
pub fn run_cli_with<R: BufRead, W: Write>(
    app: &mut TrafficApp,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let selection = app.selection();
        let hour = match app.hour_override {
            Some(h) => format!("{}", h),
            None => format!("now ({})", app.current_hour()),
        };
        writeln!(output, "\nTraffic Flow Analysis")?;
        writeln!(
            output,
            "Region: {} | Road Condition: {} | Weather: {} | Hour: {}",
            selection.region, selection.road_condition, selection.weather, hour
        )?;
        writeln!(output, "{}", app.result_text())?;
        if !app.suggestion_text().is_empty() {
            writeln!(output, "{}", app.suggestion_text())?;
        }
        writeln!(output, "1. Select Region")?;
        writeln!(output, "2. Select Road Condition")?;
        writeln!(output, "3. Select Weather")?;
        writeln!(output, "4. Set Hour")?;
        writeln!(output, "5. Predict Traffic")?;
        writeln!(output, "6. Show Traffic Graph")?;
        writeln!(output, "7. Show Map")?;
        writeln!(output, "8. Exit")?;

        let Some(answer) = prompt(input, output, "Enter your choice: ")? else {
            break;
        };
        match answer.parse::<u32>().unwrap_or(0) {
            1 => {
                if let Some(region) = choose(input, output, "Select Region", &Region::ALL)? {
                    app.select(Selection { region, ..selection });
                }
            }
            2 => {
                if let Some(road_condition) =
                    choose(input, output, "Road Condition", &RoadCondition::ALL)?
                {
                    app.select(Selection {
                        road_condition,
                        ..selection
                    });
                }
            }
            3 => {
                if let Some(weather) = choose(input, output, "Weather", &Weather::ALL)? {
                    app.select(Selection { weather, ..selection });
                }
            }
            4 => {
                let Some(answer) = prompt(
                    input,
                    output,
                    "Enter hour (0-23, blank for current time): ",
                )?
                else {
                    break;
                };
                if answer.is_empty() {
                    app.set_hour(None);
                } else {
                    match answer.parse::<u8>() {
                        Ok(h) if h < HOURS_PER_DAY => app.set_hour(Some(h)),
                        _ => writeln!(output, "Invalid hour.")?,
                    }
                }
            }
            5 => {
                let prediction = app.predict().clone();
                writeln!(output, "{}", prediction.result_text())?;
                writeln!(output, "{}", prediction.suggestion)?;
            }
            6 => match app.show_graph() {
                Ok(path) => writeln!(output, "Traffic graph saved to {}", path.display())?,
                Err(e) => {
                    log::warn!("Traffic graph failed: {}", e);
                    writeln!(output, "Error generating traffic graph: {}", e)?;
                }
            },
            7 => match app.show_map() {
                Ok(path) => writeln!(output, "Map view saved to {}", path.display())?,
                Err(e) => {
                    log::warn!("Map view failed: {}", e);
                    writeln!(output, "Error rendering map: {}", e)?;
                }
            },
            8 => {
                writeln!(output, "Exiting.")?;
                break;
            }
            _ => {
                writeln!(output, "Invalid choice. Try again.")?;
            }
        }
    }
    Ok(())
}
