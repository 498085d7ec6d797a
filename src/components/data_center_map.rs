use leptos::{
    component, create_effect, create_node_ref, create_signal, ev, html, on_cleanup, store_value, view, IntoView,
    SignalSet, StoredValue, WriteSignal,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::boundary::{fetch_boundary, prepare_boundary};
use crate::components::map_tooltip::MapTooltip;
use crate::config::MapConfig;
use crate::hover::HoverTooltipController;
use crate::map_view::{MapView, OlFeatureIndex};
use crate::models::{build_markers, load_data_centers, FeatureStore, Marker, PointerEvent, TooltipState, DATA_CENTERS_JSON};

type MountedView = Rc<RefCell<Option<MapView>>>;

fn load_markers(config: &MapConfig, features: StoredValue<FeatureStore>) -> Vec<Marker> {
    match load_data_centers(DATA_CENTERS_JSON) {
        Ok(data_centers) => features
            .try_update_value(|store| build_markers(&data_centers, &config.marker, store))
            .unwrap_or_default(),
        Err(e) => {
            leptos::logging::error!("Failed to load data centers: {}", e);
            Vec::new()
        }
    }
}

fn spawn_boundary_load(url: String, features: StoredValue<FeatureStore>, mounted: MountedView) {
    wasm_bindgen_futures::spawn_local(async move {
        let content = match fetch_boundary(&url).await {
            Ok(content) => content,
            Err(e) => {
                leptos::logging::error!("Failed to load boundary layer: {}", e);
                return;
            }
        };

        // The view may have been torn down while the request was in flight
        if mounted.borrow().is_none() {
            return;
        }

        let Some(prepared) = features.try_update_value(|store| prepare_boundary(&content, store)) else {
            return;
        };
        let layer = match prepared {
            Ok(layer) => layer,
            Err(e) => {
                leptos::logging::error!("Failed to prepare boundary layer: {}", e);
                return;
            }
        };

        if let Some(view) = mounted.borrow().as_ref() {
            if let Err(e) = view.add_boundary(&layer) {
                leptos::logging::error!("Failed to add boundary layer: {:?}", e);
            }
        }
    });
}

fn publish(set_tooltip: WriteSignal<TooltipState>, state: Option<TooltipState>) {
    if let Some(state) = state {
        set_tooltip.set(state);
    }
}

/// Map of data-center sites over the boundary overlay, with a hover tooltip
/// naming the site under the pointer.
#[component]
#[must_use]
pub fn DataCenterMap(#[prop(optional)] config: Option<MapConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let container_ref = create_node_ref::<html::Div>();
    let (tooltip, set_tooltip) = create_signal(TooltipState::default());
    let controller = store_value(HoverTooltipController::new());
    let features = store_value(FeatureStore::new());
    let mounted: MountedView = Rc::new(RefCell::new(None));

    let markers = load_markers(&config, features);

    create_effect({
        let mounted = mounted.clone();
        move |_| {
            let Some(container) = container_ref.get() else { return };
            if mounted.borrow().is_some() {
                return;
            }

            let on_pointer_move = move |event: &PointerEvent, index: &OlFeatureIndex<'_>| {
                let state = features
                    .with_value(|store| controller.try_update_value(|c| c.on_pointer_move(event, index, store).clone()));
                publish(set_tooltip, state);
            };

            match MapView::mount(&container, &config, &markers, on_pointer_move) {
                Ok(view) => {
                    *mounted.borrow_mut() = Some(view);
                    spawn_boundary_load(config.boundary.url.clone(), features, mounted.clone());
                }
                Err(e) => leptos::logging::error!("Failed to initialize map: {:?}", e),
            }
        }
    });

    let _ = leptos_use::use_event_listener(container_ref, ev::pointerleave, move |_| {
        publish(set_tooltip, controller.try_update_value(|c| c.on_pointer_leave().clone()));
    });

    on_cleanup(move || {
        // Dropping the view removes the engine listener and detaches the map
        mounted.borrow_mut().take();
    });

    view! {
        <div class="map-container" node_ref=container_ref style="height: 100%; width: 100%;">
            <MapTooltip tooltip=tooltip />
        </div>
    }
}
