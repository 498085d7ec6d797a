/// Attribute holding a data center's display name
pub const SITE_NAME_ATTR: &str = "siteName";

/// Attribute holding a data center's location
pub const LOCATION_ATTR: &str = "location";

/// Prefix of the hover tooltip text
pub const TOOLTIP_PREFIX: &str = "Data Center: ";

/// Singapore boundary polygons, loaded once when the map mounts
pub const BOUNDARY_URL: &str = "https://dxdtan.github.io/SingaporeMap/SingaporeMap.geojson";

/// Projection of the boundary GeoJSON document
pub const DATA_PROJECTION: &str = "EPSG:4326";

/// Projection the map view renders in
pub const FEATURE_PROJECTION: &str = "EPSG:3857";

/// Initial view center in `FEATURE_PROJECTION` coordinates
pub const VIEW_CENTER: (f64, f64) = (11_559_777.51, 145_668.88);
pub const VIEW_ZOOM: f64 = 10.6;
pub const VIEW_MIN_ZOOM: f64 = 0.0;

pub const BOUNDARY_BACKGROUND: &str = "#8CAAD9";

/// Boundary fill RGB, faded from `GRADIENT_ALPHA_START` to `GRADIENT_ALPHA_END`
pub const GRADIENT_RGB: (u8, u8, u8) = (113, 223, 80);
pub const GRADIENT_ALPHA_START: f64 = 1.0;
pub const GRADIENT_ALPHA_END: f64 = 0.4;
/// Number of equal intervals between gradient stops
pub const GRADIENT_STEPS: u32 = 6;
/// Gradient width in CSS pixels, before scaling by the device pixel ratio
pub const GRADIENT_WIDTH: f64 = 1024.0;

pub const MARKER_ICON_SRC: &str = "assets/data_center.svg";
pub const MARKER_ICON_SCALE: f64 = 0.08;
pub const MARKER_CROSS_ORIGIN: &str = "anonymous";
