// traffic_analyzer.rs

use crate::flow_analyzer::predictive_model::TrafficModel;
use crate::global_variables::{HEAVY_CONGESTION_THRESHOLD, MODERATE_TRAFFIC_THRESHOLD};
use crate::shared_data::{RoadCondition, Selection, Weather};

pub const HEAVY_CONGESTION_SUGGESTION: &str =
    "Route Suggestion: Take an alternative route; heavy congestion expected.";
pub const MODERATE_TRAFFIC_SUGGESTION: &str =
    "Route Suggestion: Moderate traffic; proceed with caution.";
pub const CLEAR_ROUTE_SUGGESTION: &str = "Route Suggestion: Clear route ahead.";

/// A prediction together with the inputs it was made for.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficPrediction {
    pub selection: Selection,
    pub hour: u8,
    pub volume: u64,
    pub suggestion: &'static str,
}

impl TrafficPrediction {
    pub fn result_text(&self) -> String {
        format!("Predicted Traffic Volume: {}", format_volume(self.volume))
    }
}

/// Multiplier applied to the model output. Construction has no effect.
pub fn traffic_factor(condition: RoadCondition, weather: Weather) -> f64 {
    let mut factor = 1.0;
    match condition {
        RoadCondition::Accident => factor += 0.5,
        RoadCondition::Roadblock => factor += 0.3,
        RoadCondition::Clear | RoadCondition::Construction => {}
    }
    if weather == Weather::Rain {
        factor += 0.2;
    }
    factor
}

/// Adjusted volume at `hour`, floored and never below zero.
pub fn predict_traffic(
    model: &TrafficModel,
    hour: u8,
    condition: RoadCondition,
    weather: Weather,
) -> u64 {
    let adjusted = model.evaluate(f64::from(hour)) * traffic_factor(condition, weather);
    if adjusted > 0.0 {
        adjusted.floor() as u64
    } else {
        0
    }
}

pub fn get_route_suggestion(prediction: u64) -> &'static str {
    if prediction > HEAVY_CONGESTION_THRESHOLD {
        HEAVY_CONGESTION_SUGGESTION
    } else if prediction > MODERATE_TRAFFIC_THRESHOLD {
        MODERATE_TRAFFIC_SUGGESTION
    } else {
        CLEAR_ROUTE_SUGGESTION
    }
}

pub fn predict_for_selection(
    model: &TrafficModel,
    hour: u8,
    selection: Selection,
) -> TrafficPrediction {
    let volume = predict_traffic(model, hour, selection.road_condition, selection.weather);
    let suggestion = get_route_suggestion(volume);
    log::info!(
        "[Prediction] {} at hour {} ({}, {}): {} vehicles",
        selection.region,
        hour,
        selection.road_condition,
        selection.weather,
        volume
    );
    TrafficPrediction {
        selection,
        hour,
        volume,
        suggestion,
    }
}

/// Formats with comma thousands separators, e.g. `12,345`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
