//! Hover hit-testing and tooltip state for the data-center map.
//!
//! The controller never renders anything. It turns pointer events into a
//! [`TooltipState`] that the UI layer reads to place the tooltip element.

use crate::constants::{LOCATION_ATTR, SITE_NAME_ATTR, TOOLTIP_PREFIX};
use crate::models::{AttributeValue, FeatureId, Pixel, PointerEvent, TooltipState};

/// Answers "what is rendered at this pixel".
pub trait SpatialFeatureIndex {
    /// Topmost feature whose rendered geometry covers `pixel`, if any.
    fn top_feature_at(&self, pixel: Pixel) -> Option<FeatureId>;
}

/// Named attribute lookup for features returned by a [`SpatialFeatureIndex`].
pub trait AttributeStore {
    fn attribute(&self, feature: FeatureId, name: &str) -> Option<AttributeValue>;
}

/// Owns the tooltip state of one mounted map view.
#[derive(Debug, Clone, Default)]
pub struct HoverTooltipController {
    state: TooltipState,
}

impl HoverTooltipController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Routes an event to [`Self::on_pointer_leave`] or [`Self::on_pointer_move`].
    pub fn handle<I, A>(&mut self, event: &PointerEvent, index: &I, attributes: &A) -> &TooltipState
    where
        I: SpatialFeatureIndex + ?Sized,
        A: AttributeStore + ?Sized,
    {
        if event.left {
            self.on_pointer_leave()
        } else {
            self.on_pointer_move(event, index, attributes)
        }
    }

    pub fn on_pointer_move<I, A>(&mut self, event: &PointerEvent, index: &I, attributes: &A) -> &TooltipState
    where
        I: SpatialFeatureIndex + ?Sized,
        A: AttributeStore + ?Sized,
    {
        if event.dragging {
            self.state.hide_and_forget();
            return &self.state;
        }

        let hit = index.top_feature_at(event.pixel);

        match hit.and_then(|feature| Self::site_name(feature, attributes).map(|name| (feature, name))) {
            Some((feature, site_name)) => {
                self.state.position = event.pixel;
                // Text only refreshes when the pointer moves onto a different feature
                if self.state.active_feature != Some(feature) {
                    self.state.visible = true;
                    self.state.text = format!("{TOOLTIP_PREFIX}{site_name}");
                }
            }
            None => self.state.visible = false,
        }

        self.state.active_feature = hit;
        &self.state
    }

    pub fn on_pointer_leave(&mut self) -> &TooltipState {
        self.state.hide_and_forget();
        &self.state
    }

    /// Site name of a feature that qualifies for a tooltip: both the site name
    /// and the location must be present.
    fn site_name<A>(feature: FeatureId, attributes: &A) -> Option<AttributeValue>
    where
        A: AttributeStore + ?Sized,
    {
        let site_name = attributes.attribute(feature, SITE_NAME_ATTR).filter(AttributeValue::is_present)?;
        attributes.attribute(feature, LOCATION_ATTR).filter(AttributeValue::is_present)?;
        Some(site_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Feature, FeatureStore};
    use std::cell::Cell;

    /// Index that reports whatever feature the test put under the pointer.
    struct FixedIndex {
        hit: Cell<Option<FeatureId>>,
    }

    impl FixedIndex {
        fn new(hit: Option<FeatureId>) -> Self {
            Self { hit: Cell::new(hit) }
        }

        fn point_at(&self, hit: Option<FeatureId>) {
            self.hit.set(hit);
        }
    }

    impl SpatialFeatureIndex for FixedIndex {
        fn top_feature_at(&self, _pixel: Pixel) -> Option<FeatureId> {
            self.hit.get()
        }
    }

    fn store_with_sites() -> (FeatureStore, FeatureId, FeatureId, FeatureId, FeatureId) {
        let mut store = FeatureStore::new();
        let alpha = store.insert_with(|id| {
            Feature::new(id)
                .with_attribute(SITE_NAME_ATTR, "DC-Alpha")
                .with_attribute(LOCATION_ATTR, "Block 1")
        });
        let beta = store.insert_with(|id| {
            Feature::new(id)
                .with_attribute(SITE_NAME_ATTR, "DC-Beta")
                .with_attribute(LOCATION_ATTR, "Block 2")
        });
        let no_location = store.insert_with(|id| Feature::new(id).with_attribute(SITE_NAME_ATTR, "DC-Gamma"));
        let boundary = store.insert_with(|id| Feature::new(id).with_attribute("name", "Central Region"));
        (store, alpha, beta, no_location, boundary)
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::moved(Pixel::new(x, y))
    }

    #[test]
    fn test_hover_shows_site_name_at_pointer() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        let state = controller.on_pointer_move(&moved(120.0, 80.0), &index, &store);

        assert!(state.visible);
        assert_eq!(state.position, Pixel::new(120.0, 80.0));
        assert_eq!(state.text, "Data Center: DC-Alpha");
        assert_eq!(state.active_feature, Some(alpha));
    }

    #[test]
    fn test_dragging_hides_and_clears_feature() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        controller.on_pointer_move(&moved(120.0, 80.0), &index, &store);
        let state = controller.on_pointer_move(&PointerEvent::dragged(Pixel::new(120.0, 80.0)), &index, &store);

        assert!(!state.visible);
        assert_eq!(state.active_feature, None);
    }

    #[test]
    fn test_dragging_from_fresh_state() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        let state = controller.on_pointer_move(&PointerEvent::dragged(Pixel::new(5.0, 5.0)), &index, &store);

        assert!(!state.visible);
        assert_eq!(state.active_feature, None);
    }

    #[test]
    fn test_nothing_under_pointer_hides() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        controller.on_pointer_move(&moved(10.0, 10.0), &index, &store);
        index.point_at(None);
        let state = controller.on_pointer_move(&moved(300.0, 200.0), &index, &store);

        assert!(!state.visible);
        assert_eq!(state.active_feature, None);
    }

    #[test]
    fn test_missing_location_hides_but_tracks_feature() {
        let (store, alpha, _, no_location, _) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        controller.on_pointer_move(&moved(10.0, 10.0), &index, &store);
        index.point_at(Some(no_location));
        let state = controller.on_pointer_move(&moved(20.0, 20.0), &index, &store);

        assert!(!state.visible);
        assert_eq!(state.active_feature, Some(no_location));
        // Position only follows qualifying features
        assert_eq!(state.position, Pixel::new(10.0, 10.0));
    }

    #[test]
    fn test_boundary_feature_without_site_attributes_hides() {
        let (store, _, _, _, boundary) = store_with_sites();
        let index = FixedIndex::new(Some(boundary));
        let mut controller = HoverTooltipController::new();

        let state = controller.on_pointer_move(&moved(50.0, 50.0), &index, &store);

        assert!(!state.visible);
        assert_eq!(state.active_feature, Some(boundary));
    }

    #[test]
    fn test_empty_site_name_counts_as_missing() {
        let mut store = FeatureStore::new();
        let blank = store.insert_with(|id| {
            Feature::new(id)
                .with_attribute(SITE_NAME_ATTR, "")
                .with_attribute(LOCATION_ATTR, "Block 9")
        });
        let index = FixedIndex::new(Some(blank));
        let mut controller = HoverTooltipController::new();

        assert!(!controller.on_pointer_move(&moved(1.0, 1.0), &index, &store).visible);
    }

    #[test]
    fn test_numeric_site_name_is_rendered() {
        let mut store = FeatureStore::new();
        let numbered = store.insert_with(|id| {
            Feature::new(id)
                .with_attribute(SITE_NAME_ATTR, 7.0)
                .with_attribute(LOCATION_ATTR, "Block 7")
        });
        let index = FixedIndex::new(Some(numbered));
        let mut controller = HoverTooltipController::new();

        let state = controller.on_pointer_move(&moved(1.0, 1.0), &index, &store);
        assert!(state.visible);
        assert_eq!(state.text, "Data Center: 7");
    }

    #[test]
    fn test_same_feature_keeps_text_and_follows_pointer() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        let first = controller.on_pointer_move(&moved(120.0, 80.0), &index, &store).clone();
        let second = controller.on_pointer_move(&moved(122.0, 83.0), &index, &store).clone();

        assert_eq!(first.text, second.text);
        assert_eq!(first.position, Pixel::new(120.0, 80.0));
        assert_eq!(second.position, Pixel::new(122.0, 83.0));
        assert!(second.visible);
    }

    #[test]
    fn test_same_pixel_twice_is_stable() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        let first = controller.on_pointer_move(&moved(64.0, 32.0), &index, &store).clone();
        let second = controller.on_pointer_move(&moved(64.0, 32.0), &index, &store).clone();

        assert_eq!(first, second);
    }

    #[test]
    fn test_switching_features_refreshes_text() {
        let (store, alpha, beta, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        let state = controller.on_pointer_move(&moved(10.0, 10.0), &index, &store);
        assert_eq!(state.text, "Data Center: DC-Alpha");

        index.point_at(Some(beta));
        let state = controller.on_pointer_move(&moved(40.0, 12.0), &index, &store);
        assert!(state.visible);
        assert_eq!(state.text, "Data Center: DC-Beta");
        assert_eq!(state.active_feature, Some(beta));
    }

    #[test]
    fn test_identity_not_attributes_decides_refresh() {
        let mut store = FeatureStore::new();
        let build = |id| {
            Feature::new(id)
                .with_attribute(SITE_NAME_ATTR, "Twin")
                .with_attribute(LOCATION_ATTR, "Block 3")
        };
        let first = store.insert_with(build);
        let second = store.insert_with(build);
        let index = FixedIndex::new(Some(first));
        let mut controller = HoverTooltipController::new();

        controller.on_pointer_move(&moved(1.0, 1.0), &index, &store);
        index.point_at(Some(second));
        let state = controller.on_pointer_move(&moved(2.0, 2.0), &index, &store);

        assert_eq!(state.active_feature, Some(second));
        assert!(state.visible);
    }

    #[test]
    fn test_return_to_same_feature_after_hidden_gap_shows_again() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        controller.on_pointer_move(&moved(1.0, 1.0), &index, &store);
        index.point_at(None);
        controller.on_pointer_move(&moved(2.0, 2.0), &index, &store);
        index.point_at(Some(alpha));
        let state = controller.on_pointer_move(&moved(3.0, 3.0), &index, &store);

        assert!(state.visible);
        assert_eq!(state.text, "Data Center: DC-Alpha");
    }

    #[test]
    fn test_pointer_leave_from_any_state() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));

        let mut fresh = HoverTooltipController::new();
        let state = fresh.on_pointer_leave();
        assert!(!state.visible);
        assert_eq!(state.active_feature, None);

        let mut hovering = HoverTooltipController::new();
        hovering.on_pointer_move(&moved(1.0, 1.0), &index, &store);
        let state = hovering.on_pointer_leave();
        assert!(!state.visible);
        assert_eq!(state.active_feature, None);
    }

    #[test]
    fn test_reentering_same_feature_after_leave_shows_again() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        controller.on_pointer_move(&moved(1.0, 1.0), &index, &store);
        controller.on_pointer_leave();
        let state = controller.on_pointer_move(&moved(1.0, 1.0), &index, &store);

        assert!(state.visible);
    }

    #[test]
    fn test_handle_dispatches_leave_events() {
        let (store, alpha, ..) = store_with_sites();
        let index = FixedIndex::new(Some(alpha));
        let mut controller = HoverTooltipController::new();

        assert!(controller.handle(&moved(1.0, 1.0), &index, &store).visible);
        let state = controller.handle(&PointerEvent::leave(), &index, &store);
        assert!(!state.visible);
        assert_eq!(state.active_feature, None);
    }

    #[test]
    fn test_new_controller_starts_hidden() {
        let controller = HoverTooltipController::new();
        assert_eq!(controller.state(), &TooltipState::default());
        assert!(!controller.state().visible);
    }
}
