use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::boundary::BoundaryLayer;
use crate::config::{BoundaryConfig, GradientConfig, MapConfig};
use crate::hover::SpatialFeatureIndex;
use crate::models::{FeatureId, Marker, MarkerStyle, Pixel, PointerEvent};
use crate::openlayers::{call_method, call_static, construct, options, pair, read_pair};
use crate::style::{gradient_canvas_width, gradient_stops};

/// Hit testing against a live OpenLayers map.
pub struct OlFeatureIndex<'a> {
    map: &'a JsValue,
}

impl SpatialFeatureIndex for OlFeatureIndex<'_> {
    fn top_feature_at(&self, pixel: Pixel) -> Option<FeatureId> {
        // Returning the first feature stops the engine's top-down walk
        let first_hit = Closure::wrap(Box::new(|feature: JsValue| feature) as Box<dyn FnMut(JsValue) -> JsValue>);

        let hit = call_method(
            self.map,
            "forEachFeatureAtPixel",
            &[&pair(pixel.x, pixel.y), first_hit.as_ref().unchecked_ref()],
        )
        .ok()?;

        if hit.is_undefined() || hit.is_null() {
            return None;
        }

        let id = call_method(&hit, "getId", &[]).ok()?.as_f64().and_then(FeatureId::from_f64);
        if id.is_none() {
            leptos::logging::warn!("Feature without a map id under the pointer");
        }
        id
    }
}

/// A mounted OpenLayers map and its pointer-move subscription.
///
/// Dropping the view unsubscribes and detaches the map from its container.
pub struct MapView {
    map: JsValue,
    boundary_source: JsValue,
    boundary_format: JsValue,
    pointer_move_key: JsValue,
    _on_pointer_move: Closure<dyn FnMut(JsValue)>,
}

impl MapView {
    /// Builds the map inside `container` with the boundary layer (empty until
    /// [`MapView::add_boundary`]) below the data-center markers.
    ///
    /// `on_pointer_move` runs synchronously for every engine `pointermove`.
    ///
    /// # Errors
    /// Returns the JS exception if OpenLayers is missing or rejects an object.
    pub fn mount<F>(
        container: &web_sys::HtmlElement,
        config: &MapConfig,
        markers: &[Marker],
        mut on_pointer_move: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(&PointerEvent, &OlFeatureIndex<'_>) + 'static,
    {
        let (boundary_layer, boundary_source) = build_boundary_layer(&config.boundary)?;
        let marker_layer = build_marker_layer(markers)?;
        let boundary_format = construct(
            "format.GeoJSON",
            &[&options(&[
                ("dataProjection", &JsValue::from_str(&config.boundary.data_projection)),
                ("featureProjection", &JsValue::from_str(&config.boundary.feature_projection)),
            ])?],
        )?;

        let layers = js_sys::Array::new();
        layers.push(&boundary_layer);
        layers.push(&marker_layer);

        // A bare base interaction leaves the map without drag-pan or zoom
        let interactions = js_sys::Array::new();
        interactions.push(&construct("interaction.Interaction", &[&options(&[])?])?);

        let view = construct(
            "View",
            &[&options(&[
                ("center", &pair(config.view.center.0, config.view.center.1)),
                ("minZoom", &JsValue::from_f64(config.view.min_zoom)),
                ("zoom", &JsValue::from_f64(config.view.zoom)),
            ])?],
        )?;

        let target: &JsValue = container;
        let map = construct(
            "Map",
            &[&options(&[
                ("target", target),
                ("interactions", &interactions),
                ("layers", &layers),
                ("view", &view),
                ("controls", &js_sys::Array::new()),
            ])?],
        )?;

        let map_for_events = map.clone();
        let on_move = Closure::wrap(Box::new(move |event: JsValue| {
            let Some(pointer) = read_pointer_event(&event) else {
                return;
            };
            let index = OlFeatureIndex { map: &map_for_events };
            on_pointer_move(&pointer, &index);
        }) as Box<dyn FnMut(JsValue)>);

        let pointer_move_key = call_method(
            &map,
            "on",
            &[&JsValue::from_str("pointermove"), on_move.as_ref().unchecked_ref()],
        )?;

        crate::log!("Map mounted with {} markers", markers.len());

        Ok(Self {
            map,
            boundary_source,
            boundary_format,
            pointer_move_key,
            _on_pointer_move: on_move,
        })
    }

    /// Hands the prepared boundary features to the engine.
    ///
    /// # Errors
    /// Returns the JS exception if the document cannot be read as `GeoJSON`.
    pub fn add_boundary(&self, layer: &BoundaryLayer) -> Result<(), JsValue> {
        let document = js_sys::JSON::parse(&layer.document.to_string())?;
        let features = call_method(&self.boundary_format, "readFeatures", &[&document])?;
        call_method(&self.boundary_source, "addFeatures", &[&features])?;
        crate::log!("Boundary layer shows {} features", layer.feature_ids.len());
        Ok(())
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        if let Err(e) = call_static("Observable.unByKey", &[&self.pointer_move_key]) {
            leptos::logging::error!("Failed to remove pointermove listener: {:?}", e);
        }
        if let Err(e) = call_method(&self.map, "setTarget", &[&JsValue::NULL]) {
            leptos::logging::error!("Failed to detach map: {:?}", e);
        }
    }
}

fn read_pointer_event(event: &JsValue) -> Option<PointerEvent> {
    let pixel = js_sys::Reflect::get(event, &JsValue::from_str("pixel")).ok()?;
    let (x, y) = read_pair(&pixel)?;
    let dragging = js_sys::Reflect::get(event, &JsValue::from_str("dragging"))
        .ok()
        .and_then(|d| d.as_bool())
        .unwrap_or(false);

    Some(PointerEvent {
        pixel: Pixel::new(x, y),
        dragging,
        left: false,
    })
}

fn build_boundary_layer(config: &BoundaryConfig) -> Result<(JsValue, JsValue), JsValue> {
    let source = construct("source.Vector", &[])?;
    let fill = construct("style.Fill", &[&options(&[("color", &build_gradient(&config.fill)?)])?])?;
    let style = construct("style.Style", &[&options(&[("fill", &fill)])?])?;

    let layer = construct(
        "layer.Vector",
        &[&options(&[
            ("background", &JsValue::from_str(&config.background)),
            ("source", &source),
            ("style", &style),
        ])?],
    )?;

    Ok((layer, source))
}

/// Horizontal fading fill. Gradients live in canvas pixel space, so the width
/// follows the device pixel ratio.
fn build_gradient(gradient: &GradientConfig) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")?
        .ok_or("No 2d context")?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    let width = gradient_canvas_width(gradient, window.device_pixel_ratio());
    let fill = context.create_linear_gradient(0.0, 0.0, width, 0.0);
    for stop in gradient_stops(gradient) {
        #[allow(clippy::cast_possible_truncation)]
        let offset = stop.offset as f32;
        fill.add_color_stop(offset, &stop.color)?;
    }

    Ok(fill.into())
}

fn build_marker_style(style: &MarkerStyle) -> Result<JsValue, JsValue> {
    let icon = construct(
        "style.Icon",
        &[&options(&[
            ("crossOrigin", &JsValue::from_str(&style.cross_origin)),
            ("src", &JsValue::from_str(&style.icon_src)),
            ("scale", &JsValue::from_f64(style.scale)),
        ])?],
    )?;
    construct("style.Style", &[&options(&[("image", &icon)])?])
}

fn build_marker_layer(markers: &[Marker]) -> Result<JsValue, JsValue> {
    let features = js_sys::Array::new();
    // Markers normally share one icon style; build each distinct one once
    let mut styles: Vec<(&MarkerStyle, JsValue)> = Vec::new();

    for marker in markers {
        let cached = styles.iter().position(|(built_for, _)| *built_for == &marker.style);
        let style = match cached {
            Some(i) => styles[i].1.clone(),
            None => {
                let style = build_marker_style(&marker.style)?;
                styles.push((&marker.style, style.clone()));
                style
            }
        };

        let point = construct("geom.Point", &[&pair(marker.coordinate.0, marker.coordinate.1)])?;
        let feature = construct("Feature", &[&options(&[("geometry", &point)])?])?;
        call_method(&feature, "setId", &[&JsValue::from_f64(marker.id.as_f64())])?;
        call_method(&feature, "setStyle", &[&style])?;
        features.push(&feature);
    }

    let source = construct("source.Vector", &[&options(&[("features", &features)])?])?;
    construct("layer.Vector", &[&options(&[("source", &source)])?])
}
