use super::super::view_model::OrderDetailsVm;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InvoiceButton(vm: OrderDetailsVm) -> impl IntoView {
    let i18n = use_i18n();
    let downloading = vm.downloading;
    let busy = vm.is_busy();
    let order = vm.order;

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            size=ButtonSize::Medium
            on_click=move |_| vm.download_invoice()
            disabled=Signal::derive(move || busy.get() || downloading.get() || order.get().is_none())
        >
            {move || if downloading.get() { i18n.t("downloading") } else { i18n.t("download") }}
        </Button>
    }
}
