use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Title};

use crate::components::card::Card;
use crate::components::data_center_map::DataCenterMap;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Data Center Map"/>

        <div class="app">
            <Card body_style="margin: 0px;">
                <DataCenterMap />
            </Card>
        </div>
    }
}
