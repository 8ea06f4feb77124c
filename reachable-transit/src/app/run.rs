use std::{fmt::Display, path::PathBuf};

use crate::{
    client::ReachabilityClient,
    config::ReachConfig,
    export::{ClassifiedEntities, ExportSummary},
    map::ReachableMap,
    model::ReachablePolygon,
    util::fs,
    ReachError,
};

/// what a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub export: ExportSummary,
    pub map_file: PathBuf,
    pub markers: usize,
    pub has_area: bool,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stations: {:?} ({} rows), bus stops: {:?} ({} rows), map: {:?} ({} markers)",
            self.export.stations_file,
            self.export.stations,
            self.export.bus_stops_file,
            self.export.bus_stops,
            self.map_file,
            self.markers
        )
    }
}

/// runs the reachability pipeline: fetch, classify and export, render.
/// each stage runs once, in order, and the first failure ends the run.
///
/// # Arguments
/// * `config` - resolved settings for this run
///
/// # Result
/// a summary of the files written, otherwise the error of the stage that failed
pub fn run(config: &ReachConfig) -> Result<RunSummary, ReachError> {
    log::info!(
        "starting reachability search at {}: {}",
        chrono::Local::now().to_rfc3339(),
        config.query
    );

    let client = ReachabilityClient::new(&config.api, &config.api_key)?;
    let fetched = client.fetch_with_body(&config.query)?;
    let reachability = fetched.reachability;
    log::info!(
        "received {} reachable entities, polygon from API: {}",
        reachability.entities.len(),
        reachability.polygon.is_some()
    );
    if let Some(path) = &config.save_response {
        fs::create_parent_dirs(path)?;
        fs::write_file(path, fetched.body.as_bytes())?;
        log::info!("saved raw response to {path:?}");
    }

    let classified = ClassifiedEntities::classify(&reachability.entities, &config.query);
    let export = classified.export(&config.stations_file(), &config.bus_stops_file())?;

    // derived after classification so the area only spans exported entities
    let polygon = match reachability.polygon {
        Some(polygon) => polygon,
        None => ReachablePolygon::around(config.query.origin(), classified.iter()),
    };
    let map = ReachableMap::new(&config.query)
        .with_polygon(&polygon)
        .with_entities(classified.iter());
    map.write(&config.map_file)?;

    Ok(RunSummary {
        export,
        map_file: config.map_file.clone(),
        markers: map.marker_count(),
        has_area: map.has_area(),
    })
}
