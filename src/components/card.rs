use leptos::{component, view, Children, IntoView};

#[component]
#[must_use]
pub fn Card(
    children: Children,
    #[prop(optional, into)] body_style: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body" style=body_style.unwrap_or_default()>
                {children()}
            </div>
        </div>
    }
}
