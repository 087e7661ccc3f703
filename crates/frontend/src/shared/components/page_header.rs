use leptos::prelude::*;

/// Page title row with an actions slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,

    /// Buttons rendered on the right (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
