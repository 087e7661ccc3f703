use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page page--not-found">
            <Card>
                {move || {
                    let t = i18n.translator("common");
                    let back = t.t("back-to-orders");
                    view! {
                        <h1>"404"</h1>
                        <h2>{t.t("not-found")}</h2>
                        <p>{t.t("not-found-hint")}</p>
                        <A href="/orders">{back}</A>
                    }
                }}
            </Card>
        </div>
    }
}
