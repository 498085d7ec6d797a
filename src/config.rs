use serde::Deserialize;

use crate::constants::{
    BOUNDARY_BACKGROUND, BOUNDARY_URL, DATA_PROJECTION, FEATURE_PROJECTION, GRADIENT_ALPHA_END,
    GRADIENT_ALPHA_START, GRADIENT_RGB, GRADIENT_STEPS, GRADIENT_WIDTH, MARKER_CROSS_ORIGIN,
    MARKER_ICON_SCALE, MARKER_ICON_SRC, VIEW_CENTER, VIEW_MIN_ZOOM, VIEW_ZOOM,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: (f64, f64),
    pub zoom: f64,
    pub min_zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: VIEW_CENTER,
            zoom: VIEW_ZOOM,
            min_zoom: VIEW_MIN_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub url: String,
    pub data_projection: String,
    pub feature_projection: String,
    pub background: String,
    pub fill: GradientConfig,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            url: BOUNDARY_URL.to_string(),
            data_projection: DATA_PROJECTION.to_string(),
            feature_projection: FEATURE_PROJECTION.to_string(),
            background: BOUNDARY_BACKGROUND.to_string(),
            fill: GradientConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub rgb: (u8, u8, u8),
    pub alpha_start: f64,
    pub alpha_end: f64,
    pub steps: u32,
    /// Width in CSS pixels; scaled by the device pixel ratio when drawn.
    pub width: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            rgb: GRADIENT_RGB,
            alpha_start: GRADIENT_ALPHA_START,
            alpha_end: GRADIENT_ALPHA_END,
            steps: GRADIENT_STEPS,
            width: GRADIENT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub icon_src: String,
    pub scale: f64,
    pub cross_origin: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            icon_src: MARKER_ICON_SRC.to_string(),
            scale: MARKER_ICON_SCALE,
            cross_origin: MARKER_CROSS_ORIGIN.to_string(),
        }
    }
}

/// Everything the data-center map needs to build its view and layers.
///
/// Missing fields fall back to the defaults in [`crate::constants`], so a
/// partial JSON document is a valid override.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub view: ViewConfig,
    pub boundary: BoundaryConfig,
    pub marker: MarkerConfig,
}

impl MapConfig {
    /// Parses a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Invalid map config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = MapConfig::default();
        assert_eq!(config.view.center, VIEW_CENTER);
        assert_eq!(config.view.zoom, 10.6);
        assert_eq!(config.boundary.url, BOUNDARY_URL);
        assert_eq!(config.boundary.background, "#8CAAD9");
        assert_eq!(config.marker.scale, 0.08);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = MapConfig::from_json(r#"{"view": {"zoom": 12.0}, "marker": {"scale": 0.1}}"#)
            .unwrap();
        assert_eq!(config.view.zoom, 12.0);
        assert_eq!(config.view.center, VIEW_CENTER);
        assert_eq!(config.marker.scale, 0.1);
        assert_eq!(config.marker.icon_src, MARKER_ICON_SRC);
        assert_eq!(config.boundary, BoundaryConfig::default());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(MapConfig::from_json(r#"{"view": {"zoom": "close"}}"#).is_err());
        assert!(MapConfig::from_json("not json").is_err());
    }
}
