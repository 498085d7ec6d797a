use super::feature::FeatureId;

/// Screen position in CSS pixels, relative to the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pixel: Pixel,
    pub dragging: bool,
    /// Set when the pointer has left the map surface.
    pub left: bool,
}

impl PointerEvent {
    #[must_use]
    pub const fn moved(pixel: Pixel) -> Self {
        Self { pixel, dragging: false, left: false }
    }

    #[must_use]
    pub const fn dragged(pixel: Pixel) -> Self {
        Self { pixel, dragging: true, left: false }
    }

    #[must_use]
    pub const fn leave() -> Self {
        Self {
            pixel: Pixel::new(0.0, 0.0),
            dragging: false,
            left: true,
        }
    }
}

/// What the tooltip overlay should show.
///
/// `visible` implies `active_feature` is set and the feature carried both a
/// site name and a location when the tooltip was shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub position: Pixel,
    pub text: String,
    pub active_feature: Option<FeatureId>,
}

impl TooltipState {
    pub(crate) fn hide_and_forget(&mut self) {
        self.visible = false;
        self.active_feature = None;
    }
}
