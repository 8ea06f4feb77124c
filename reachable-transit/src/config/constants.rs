/// Kayabacho station, Tokyo
pub const DEFAULT_LAT: f64 = 35.6817137;
pub const DEFAULT_LON: f64 = 139.7777797;
pub const DEFAULT_TIME_LIMIT_MINUTES: i64 = 30;
pub const DEFAULT_MAX_TRANSFERS: i64 = 1;
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "csv";
pub const DEFAULT_MAP_FILENAME: &str = "reachable_map.html";

pub const STATIONS_FILENAME: &str = "stations.csv";
pub const BUS_STOPS_FILENAME: &str = "bus_stops.csv";

pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";
pub const DEFAULT_BASE_URL: &str = "https://navitime-reachable.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "navitime-reachable.p.rapidapi.com";
pub const DEFAULT_ENDPOINT: &str = "reachable_transit";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PARTITION_COUNT: i64 = 36;
pub const DEFAULT_WALK_SPEED_KMH: u32 = 5;
pub const DEFAULT_NODE_TYPE: &str = "station:airport:port:busstop";
