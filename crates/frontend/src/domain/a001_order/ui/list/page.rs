use super::model::{fetch_orders, insert_test_data, OrderRow, COLUMN_KEYS};
use crate::shared::components::{Breadcrumb, Breadcrumbs, PageHeader};
use crate::shared::i18n::use_i18n;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_order::aggregate::Order;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn OrdersList() -> impl IntoView {
    let i18n = use_i18n();
    let notifications = use_notifications();
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_orders().await {
                Ok(list) => orders.set(list),
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    orders.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };
    reload();

    let load_demo = {
        let i18n = i18n.clone();
        move |_| {
            let t = i18n.translator_untracked("order");
            spawn_local(async move {
                match insert_test_data().await {
                    Ok(ids) => {
                        log::info!("Inserted {} demo orders", ids.len());
                        reload();
                    }
                    Err(e) => {
                        log::error!("Failed to insert demo orders: {}", e);
                        notifications.error(t.t("common:errors.something-wrong"));
                    }
                }
            });
        }
    };

    let crumbs = {
        let i18n = i18n.clone();
        Signal::derive(move || {
            let t = i18n.translator("order");
            vec![
                Breadcrumb::link(t.t("dashboard"), "/dashboard"),
                Breadcrumb::current(t.t("orders")),
            ]
        })
    };
    let title = {
        let i18n = i18n.clone();
        Signal::derive(move || i18n.t("orders"))
    };

    let load_demo_label = {
        let i18n = i18n.clone();
        Signal::derive(move || i18n.t("load-demo"))
    };

    view! {
        <div class="page">
            <Breadcrumbs items=crumbs />
            <PageHeader title=title>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Medium
                    on_click=load_demo
                    disabled=Signal::derive(move || loading.get())
                >
                    {load_demo_label}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || {
                    let t = i18n.translator("order");
                    if loading.get() {
                        let label = t.t("common:loading");
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                                <Spinner />
                                <span>{label}</span>
                            </Flex>
                        }
                        .into_any();
                    }
                    let list = orders.get();
                    if list.is_empty() {
                        let label = t.t("no-orders");
                        return view! { <Card><div class="empty">{label}</div></Card> }.into_any();
                    }
                    let header = COLUMN_KEYS
                        .iter()
                        .map(|key| {
                            let label = t.t(key);
                            view! { <TableHeaderCell>{label}</TableHeaderCell> }
                        })
                        .collect_view();
                    let rows = list
                        .iter()
                        .map(|o| order_row(OrderRow::new(o, &t)))
                        .collect_view();
                    view! {
                        <Card>
                            <Table>
                                <TableHeader>
                                    <TableRow>{header}</TableRow>
                                </TableHeader>
                                <TableBody>{rows}</TableBody>
                            </Table>
                        </Card>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

fn order_row(row: OrderRow) -> impl IntoView {
    let OrderRow {
        href,
        code,
        customer,
        items,
        total,
        status,
        created_at,
    } = row;
    view! {
        <TableRow>
            <TableCell><TableCellLayout><A href=href>{code}</A></TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{customer}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{items}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{status}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
        </TableRow>
    }
}
