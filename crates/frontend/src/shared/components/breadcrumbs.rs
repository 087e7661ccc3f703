use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` for the current page
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[component]
pub fn Breadcrumbs(#[prop(into)] items: Signal<Vec<Breadcrumb>>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs">
            {move || {
                let items = items.get();
                let last = items.len().saturating_sub(1);
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i < last).then(|| view! { <span class="breadcrumbs__sep">"/"</span> });
                        let label = match crumb.href {
                            Some(href) => view! { <A href=href>{crumb.label}</A> }.into_any(),
                            None => view! { <span class="breadcrumbs__current">{crumb.label}</span> }.into_any(),
                        };
                        view! { {label} {separator} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
