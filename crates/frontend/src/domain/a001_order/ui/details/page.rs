//! Main page component for order details (MVVM Standard)

use super::components::{InvoiceButton, ItemsTable, OrderInfo, StatusSelect, TotalsCard};
use super::state::{summary_view, NavigationTarget, SummaryView};
use super::view_model::OrderDetailsVm;
use crate::shared::components::{Breadcrumb, Breadcrumbs, PageHeader, Skeleton};
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

#[component]
pub fn OrderDetail() -> impl IntoView {
    let vm = OrderDetailsVm::new();
    let i18n = use_i18n();
    let params = use_params_map();
    let navigate = use_navigate();
    let go = Callback::new(move |target: NavigationTarget| {
        navigate(target.path(), Default::default());
    });

    Effect::new({
        let vm = vm.clone();
        move |_| {
            let id = params.read().get("id");
            match id {
                Some(id) => vm.load(id, go),
                None => go.run(NavigationTarget::NotFound),
            }
        }
    });

    let crumbs = {
        let i18n = i18n.clone();
        Signal::derive(move || {
            let t = i18n.translator("order");
            vec![
                Breadcrumb::link(t.t("dashboard"), "/dashboard"),
                Breadcrumb::link(t.t("orders"), "/orders"),
                Breadcrumb::current(t.t("details")),
            ]
        })
    };
    let title = {
        let i18n = i18n.clone();
        Signal::derive(move || i18n.t("order-details"))
    };

    let vm_status = vm.clone();
    let vm_invoice = vm.clone();
    let vm_delete = vm.clone();

    view! {
        <div class="page page--detail">
            <Breadcrumbs items=crumbs />
            <PageHeader title=title>
                <StatusSelect vm=vm_status />
                <InvoiceButton vm=vm_invoice />
                <DeleteButton vm=vm_delete go=go />
            </PageHeader>

            <div class="page__content">
                <Summary vm=vm.clone() />
                <div class="details-layout">
                    <div class="details-layout__main">
                        <ItemsTable vm=vm.clone() />
                        <TotalsCard vm=vm.clone() />
                    </div>
                    <div class="details-layout__side">
                        <OrderInfo vm=vm />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Order id and item count; skeletons while busy
#[component]
fn Summary(vm: OrderDetailsVm) -> impl IntoView {
    let i18n = use_i18n();
    let busy = vm.is_busy();
    let order = vm.order;

    view! {
        <Flex gap=FlexGap::Medium align=FlexAlign::Center class="order-summary">
            {move || {
                let t = i18n.translator("order");
                let id_label = t.t("order-id");
                match order.with(|o| summary_view(busy.get(), o.as_ref(), &t)) {
                    SummaryView::Ready { order_id, item_count, .. } => view! {
                        <span class="order-summary__id">{id_label} ": " <strong>{order_id}</strong></span>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{item_count}</Badge>
                    }
                    .into_any(),
                    SummaryView::Placeholder => view! {
                        <span class="order-summary__id">{id_label} ": " <Skeleton width="280px" /></span>
                        <Skeleton width="60px" />
                    }
                    .into_any(),
                }
            }}
        </Flex>
    }
}

#[component]
fn DeleteButton(vm: OrderDetailsVm, go: Callback<NavigationTarget>) -> impl IntoView {
    let i18n = use_i18n();
    let busy = vm.is_busy();
    let deleting = vm.deleting;
    let order = vm.order;

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            size=ButtonSize::Medium
            on_click=move |_| vm.delete(go)
            disabled=Signal::derive(move || busy.get() || order.get().is_none())
        >
            {move || if deleting.get() { i18n.t("deleting") } else { i18n.t("delete") }}
        </Button>
    }
}
