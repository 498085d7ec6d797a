use serde_json::Value;

use crate::models::{AttributeValue, Feature, FeatureId, FeatureStore};

/// Boundary `GeoJSON` ready to hand to the map engine.
///
/// Every feature carries an `id` member matching its entry in the
/// [`FeatureStore`], so features the engine reports back can be looked up.
#[derive(Debug, Clone)]
pub struct BoundaryLayer {
    pub document: Value,
    pub feature_ids: Vec<FeatureId>,
}

/// Fetch the boundary document
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body cannot be read
pub async fn fetch_boundary(url: &str) -> Result<String, String> {
    reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Boundary request rejected: {e}"))?
        .text()
        .await
        .map_err(|e| format!("Failed to read boundary body: {e}"))
}

/// Parse a boundary `FeatureCollection`, registering each feature's string and
/// number properties and stamping its id into the document.
///
/// # Errors
/// Returns error if the content is not JSON or not a `FeatureCollection` with a
/// `features` array. Nothing is registered in that case.
pub fn prepare_boundary(content: &str, store: &mut FeatureStore) -> Result<BoundaryLayer, String> {
    let mut document: Value =
        serde_json::from_str(content).map_err(|e| format!("Invalid GeoJSON: {e}"))?;

    if document["type"].as_str() != Some("FeatureCollection") {
        return Err("Invalid GeoJSON: expected a FeatureCollection".to_string());
    }

    let features = document
        .get_mut("features")
        .and_then(Value::as_array_mut)
        .ok_or("Invalid GeoJSON: missing 'features' array")?;

    let mut feature_ids = Vec::with_capacity(features.len());

    for feature in features.iter_mut() {
        let Some(object) = feature.as_object_mut() else {
            continue;
        };

        let id = store.insert_with(|id| {
            let mut registered = Feature::new(id);
            if let Some(properties) = object.get("properties").and_then(Value::as_object) {
                for (name, value) in properties {
                    if let Some(value) = AttributeValue::from_json(value) {
                        registered.attributes.insert(name.clone(), value);
                    }
                }
            }
            registered
        });

        object.insert("id".to_string(), Value::from(id.0));
        feature_ids.push(id);
    }

    crate::log!("Boundary prepared: {} features", feature_ids.len());

    Ok(BoundaryLayer { document, feature_ids })
}
