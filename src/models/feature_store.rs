use indexmap::IndexMap;

use super::feature::{AttributeValue, Feature, FeatureId};
use crate::hover::AttributeStore;

/// Owns every feature the map renders and hands out their ids.
///
/// Insertion order is kept, so iteration follows the order layers were built.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: IndexMap<FeatureId, Feature>,
    next_id: u64,
}

impl FeatureStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next id without storing anything under it.
    pub fn allocate_id(&mut self) -> FeatureId {
        let id = FeatureId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Stores a feature built by the caller around a freshly allocated id.
    pub fn insert_with<F>(&mut self, build: F) -> FeatureId
    where
        F: FnOnce(FeatureId) -> Feature,
    {
        let id = self.allocate_id();
        let feature = build(id);
        debug_assert_eq!(feature.id, id);
        self.features.insert(id, feature);
        id
    }

    #[must_use]
    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }
}

impl AttributeStore for FeatureStore {
    fn attribute(&self, feature: FeatureId, name: &str) -> Option<AttributeValue> {
        self.get(feature).and_then(|f| f.get(name)).cloned()
    }
}
