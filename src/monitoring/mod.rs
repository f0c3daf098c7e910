pub mod traffic_charts;
pub mod traffic_dashboard;
