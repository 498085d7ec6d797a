use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureId};
use super::feature_store::FeatureStore;
use crate::config::MarkerConfig;
use crate::constants::{LOCATION_ATTR, SITE_NAME_ATTR};
use crate::projection::from_lon_lat;

/// Data-center list bundled with the app
pub const DATA_CENTERS_JSON: &str = include_str!("../../data/data_centers.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCenter {
    pub long: f64,
    pub lat: f64,
    pub site_name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub icon_src: String,
    pub scale: f64,
    pub cross_origin: String,
}

impl From<&MarkerConfig> for MarkerStyle {
    fn from(config: &MarkerConfig) -> Self {
        Self {
            icon_src: config.icon_src.clone(),
            scale: config.scale,
            cross_origin: config.cross_origin.clone(),
        }
    }
}

/// A data center placed on the map: its feature handle, projected
/// coordinate and icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: FeatureId,
    /// Map coordinate in EPSG:3857
    pub coordinate: (f64, f64),
    pub style: MarkerStyle,
}

impl DataCenter {
    fn to_feature(&self, id: FeatureId) -> Feature {
        Feature::new(id)
            .with_attribute(SITE_NAME_ATTR, self.site_name.as_str())
            .with_attribute(LOCATION_ATTR, self.location.as_str())
    }
}

/// Parses a data-center list.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of
/// `{long, lat, siteName, location}` records.
pub fn load_data_centers(content: &str) -> Result<Vec<DataCenter>, String> {
    serde_json::from_str(content).map_err(|e| format!("Invalid data-center list: {e}"))
}

/// Registers every data center as a feature and returns its markers, in list
/// order.
#[must_use]
pub fn build_markers(data_centers: &[DataCenter], config: &MarkerConfig, store: &mut FeatureStore) -> Vec<Marker> {
    let style = MarkerStyle::from(config);

    data_centers
        .iter()
        .map(|dc| {
            let id = store.insert_with(|id| dc.to_feature(id));
            Marker {
                id,
                coordinate: from_lon_lat(dc.long, dc.lat),
                style: style.clone(),
            }
        })
        .collect()
}
