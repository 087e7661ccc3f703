use leptos::prelude::*;

/// Grey placeholder bar shown while data is loading.
#[component]
pub fn Skeleton(
    /// CSS width, e.g. "120px" or "60%"
    #[prop(optional, into)]
    width: Option<String>,
) -> impl IntoView {
    let style = format!("width: {};", width.unwrap_or_else(|| "100%".to_string()));
    view! { <span class="skeleton" style=style></span> }
}
