use super::super::view_model::OrderDetailsVm;
use crate::shared::i18n::use_i18n;
use contracts::domain::a001_order::aggregate::OrderStatus;
use leptos::prelude::*;

/// Выбор статуса заказа; изменение сразу уходит на сервер
#[component]
pub fn StatusSelect(vm: OrderDetailsVm) -> impl IntoView {
    let i18n = use_i18n();
    let order = vm.order;
    let updating = vm.updating_status;
    let busy = vm.is_busy();
    let current = move || order.get().map(|o| o.status.code()).unwrap_or_default();

    view! {
        <div class="form__group status-select">
            <label class="form__label" for="order-status">
                {let i18n = i18n.clone(); move || i18n.t("status-label")}
            </label>
            <select
                id="order-status"
                class="form__select"
                disabled=move || busy.get() || updating.get() || order.get().is_none()
                on:change=move |ev| {
                    if let Some(status) = OrderStatus::from_code(&event_target_value(&ev)) {
                        vm.change_status(status);
                    }
                }
            >
                {OrderStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let i18n = i18n.clone();
                        view! {
                            <option value=status.code() selected=move || current() == status.code()>
                                {move || i18n.t(&status.translation_key())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
