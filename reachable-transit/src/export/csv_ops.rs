use std::path::{Path, PathBuf};

use super::{ClassifiedEntities, EntityRow};
use crate::{model::ReachableEntity, util::fs, ReachError};

/// where the CSV files went and how many rows each holds
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub stations_file: PathBuf,
    pub stations: usize,
    pub bus_stops_file: PathBuf,
    pub bus_stops: usize,
}

impl ClassifiedEntities {
    /// writes the station and bus stop groups to their CSV files, creating
    /// missing parent directories. existing files are overwritten.
    pub fn export(
        &self,
        stations_file: &Path,
        bus_stops_file: &Path,
    ) -> Result<ExportSummary, ReachError> {
        fs::create_parent_dirs(stations_file)?;
        fs::create_parent_dirs(bus_stops_file)?;
        let stations = write_entities_csv(stations_file, &self.stations)?;
        let bus_stops = write_entities_csv(bus_stops_file, &self.bus_stops)?;
        Ok(ExportSummary {
            stations_file: stations_file.to_path_buf(),
            stations,
            bus_stops_file: bus_stops_file.to_path_buf(),
            bus_stops,
        })
    }
}

/// writes entities to a CSV file, one row each, returning the number of rows.
/// the header is written even when there are no entities.
pub fn write_entities_csv(filepath: &Path, entities: &[ReachableEntity]) -> Result<usize, ReachError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(filepath)
        .map_err(|e| ReachError::io(filepath, e.into()))?;
    writer
        .write_record(EntityRow::HEADER)
        .map_err(|e| ReachError::io(filepath, e.into()))?;
    for entity in entities {
        writer
            .serialize(EntityRow::from(entity))
            .map_err(|e| ReachError::io(filepath, e.into()))?;
    }
    writer.flush().map_err(|e| ReachError::io(filepath, e))?;
    log::info!("wrote {} rows to {filepath:?}", entities.len());
    Ok(entities.len())
}
