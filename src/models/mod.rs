mod data_center;
mod feature;
mod feature_store;
mod tooltip;

pub use data_center::{build_markers, load_data_centers, DataCenter, Marker, MarkerStyle, DATA_CENTERS_JSON};
pub use feature::{AttributeValue, Feature, FeatureId};
pub use feature_store::FeatureStore;
pub use tooltip::{Pixel, PointerEvent, TooltipState};
