use std::path::Path;

use geo::{BoundingRect, Coord, MultiPoint, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use itertools::Itertools;
use serde_json::json;
use tera::{escape_html, Context, Tera};

use super::TimeGradient;
use crate::{
    model::{EntityType, Origin, ReachQuery, ReachablePolygon, ReachableEntity},
    util::fs,
    ReachError,
};

const TEMPLATE_NAME: &str = "leaflet_map.html";
const TEMPLATE: &str = include_str!("leaflet_map.html");

/// feature `kind` property of the reachable area polygon
pub const AREA_KIND: &str = "reachable_area";
/// feature `kind` property of an entity marker
pub const ENTITY_KIND: &str = "entity";

/// an interactive Leaflet map of one reachability result: the reachable area,
/// one marker per entity colored by travel time, and the origin.
#[derive(Debug, Clone)]
pub struct ReachableMap {
    origin: Origin,
    time_limit: u32,
    max_transfers: u32,
    gradient: TimeGradient,
    area: Option<Feature>,
    markers: Vec<Feature>,
    extent: Vec<Coord<f64>>,
}

impl ReachableMap {
    pub fn new(query: &ReachQuery) -> ReachableMap {
        let origin = *query.origin();
        ReachableMap {
            origin,
            time_limit: query.time_limit(),
            max_transfers: query.max_transfers(),
            gradient: TimeGradient::new(query.time_limit()),
            area: None,
            markers: vec![],
            extent: vec![origin.coord()],
        }
    }

    /// sets the reachable area. an empty polygon leaves the map without one.
    pub fn with_polygon(mut self, polygon: &ReachablePolygon) -> ReachableMap {
        if polygon.is_empty() {
            log::warn!("reachable polygon is empty, map will not show a reachable area");
            self.area = None;
            return self;
        }
        let ring = polygon
            .closed_ring()
            .coords()
            .map(|c| vec![c.x, c.y])
            .collect_vec();
        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), json!(AREA_KIND));
        properties.insert(
            String::from("tooltip"),
            json!(format!(
                "reachable within {} min, {} transfer(s)",
                self.time_limit, self.max_transfers
            )),
        );
        self.area = Some(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
        self.extent.extend(polygon.vertices().iter().copied());
        self
    }

    /// adds one marker per entity
    pub fn with_entities<'a, I>(mut self, entities: I) -> ReachableMap
    where
        I: IntoIterator<Item = &'a ReachableEntity>,
    {
        for entity in entities {
            let feature = self.entity_feature(entity);
            self.markers.push(feature);
            self.extent.push(entity.coord());
        }
        self
    }

    pub fn has_area(&self) -> bool {
        self.area.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// the entity markers as a GeoJSON feature collection
    pub fn entity_layer(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.markers.clone(),
            foreign_members: None,
        }
    }

    /// renders the map page. text values are HTML-escaped by the template
    /// engine; layer data is inserted as inline-script JSON.
    pub fn to_html(&self) -> Result<String, ReachError> {
        let origin = json!({
            "lat": self.origin.lat,
            "lon": self.origin.lon,
            "label": format!("origin {}", self.origin),
        });
        let area = match &self.area {
            Some(feature) => to_script_json(feature)?,
            None => String::from("null"),
        };
        let bounds = match self.bounds() {
            Some(b) => to_script_json(&b)?,
            None => String::from("null"),
        };

        let mut context = Context::new();
        context.insert(
            "title",
            &format!(
                "Reachable within {} min from {}",
                self.time_limit, self.origin
            ),
        );
        context.insert("generated_at", &chrono::Local::now().to_rfc3339());
        context.insert("gradient_start", &self.gradient.start_color());
        context.insert("gradient_end", &self.gradient.end_color());
        context.insert("origin", &to_script_json(&origin)?);
        context.insert("area", &area);
        context.insert("entities", &to_script_json(&self.entity_layer())?);
        context.insert("bounds", &bounds);
        context.insert("legend", &to_script_json(&self.legend_html())?);

        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        let html = tera.render(TEMPLATE_NAME, &context)?;
        Ok(html)
    }

    /// renders the map and writes it to a single HTML file, replacing any
    /// existing file at that path.
    pub fn write(&self, filepath: &Path) -> Result<(), ReachError> {
        let html = self.to_html()?;
        fs::create_parent_dirs(filepath)?;
        fs::write_file(filepath, html.as_bytes())?;
        log::info!(
            "wrote map with {} markers to {filepath:?}",
            self.marker_count()
        );
        Ok(())
    }

    fn entity_feature(&self, entity: &ReachableEntity) -> Feature {
        let name = escape_html(&entity.name);
        let tooltip = format!(
            "{name} ({} min, {} transfer(s))",
            entity.travel_time, entity.transfers
        );
        let kind_label = match entity.entity_type {
            EntityType::Station => "station",
            EntityType::BusStop => "bus stop",
        };
        let mut popup = format!(
            "<b>{name}</b><br>{kind_label}<br>travel time: {} min<br>transfers: {}",
            entity.travel_time, entity.transfers
        );
        if let Some(line) = &entity.line_name {
            popup.push_str(&format!("<br>line: {}", escape_html(line)));
        }

        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), json!(ENTITY_KIND));
        properties.insert(String::from("id"), json!(entity.id));
        properties.insert(String::from("name"), json!(entity.name));
        properties.insert(
            String::from("entity_type"),
            json!(entity.entity_type.to_string()),
        );
        properties.insert(String::from("travel_time_min"), json!(entity.travel_time));
        properties.insert(String::from("transfers"), json!(entity.transfers));
        properties.insert(String::from("line_name"), json!(entity.line_name));
        properties.insert(
            String::from("color"),
            json!(self.gradient.color(entity.travel_time)),
        );
        properties.insert(String::from("tooltip"), json!(tooltip));
        properties.insert(String::from("popup"), json!(popup));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![entity.lon, entity.lat]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    /// [[south, west], [north, east]] covering the origin, area and markers
    fn bounds(&self) -> Option<[[f64; 2]; 2]> {
        if self.extent.len() < 2 {
            return None;
        }
        let points = self.extent.iter().map(|c| Point::from(*c)).collect_vec();
        let rect = MultiPoint::new(points).bounding_rect()?;
        Some([
            [rect.min().y, rect.min().x],
            [rect.max().y, rect.max().x],
        ])
    }

    fn legend_html(&self) -> String {
        format!(
            "<b>travel time</b><div class='bar'></div><div class='ticks'><span>0 min</span><span>{} min</span></div>",
            self.time_limit
        )
    }
}

/// serializes a value as JSON that is safe inside an inline `<script>` block
fn to_script_json<T: serde::Serialize>(value: &T) -> Result<String, ReachError> {
    let json = serde_json::to_string(value)
        .map_err(|e| ReachError::RenderError(format!("failed encoding map data: {e}")))?;
    Ok(json.replace("</", "<\\/").replace("<!--", "<\\!--"))
}
