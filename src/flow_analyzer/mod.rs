pub mod predictive_model;
pub mod traffic_analyzer;

// Re-export the items used by the dashboard and the binaries
pub use predictive_model::{train_model, TrafficModel};
pub use traffic_analyzer::{
    get_route_suggestion, predict_for_selection, predict_traffic, TrafficPrediction,
};
