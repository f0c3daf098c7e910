// Dataset generation
pub const HOURS_PER_DAY: u8 = 24;
pub const DEFAULT_VOLUME_SEED: u64 = 0;
pub const MIN_TRAFFIC_VOLUME: u32 = 100;
// Exclusive upper bound
pub const MAX_TRAFFIC_VOLUME: u32 = 500;
// Largest volume accepted from an external dataset. Keeps every adjusted
// prediction an exact integer well inside u64.
pub const MAX_DATASET_VOLUME: f64 = 1.0e15;

// Route suggestion thresholds
pub const HEAVY_CONGESTION_THRESHOLD: u64 = 400;
pub const MODERATE_TRAFFIC_THRESHOLD: u64 = 300;

// Configuration
pub const CONFIG_ENV_VAR: &str = "TRAFFIC_APP_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "traffic_app.json";

// Files
pub const DEFAULT_MAP_IMAGE: &str = "assets/map_image.png";
pub const DEFAULT_GRAPH_OUTPUT: &str = "traffic_graph.png";
pub const DEFAULT_MAP_OUTPUT: &str = "map_view.png";
pub const DEFAULT_EXPORT_FILE: &str = "traffic_data.csv";

// Rendering
pub const GRAPH_SIZE: (u32, u32) = (1000, 600);
pub const MAP_SIZE: (u32, u32) = (600, 400);
pub const MAP_BORDER_WIDTH: u32 = 2;
