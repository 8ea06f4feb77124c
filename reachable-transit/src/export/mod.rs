mod classified_entities;
mod csv_ops;
mod entity_row;

pub use classified_entities::ClassifiedEntities;
pub use csv_ops::{write_entities_csv, ExportSummary};
pub use entity_row::EntityRow;
