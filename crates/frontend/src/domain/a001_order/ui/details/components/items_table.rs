use super::super::state::money_label;
use super::super::view_model::OrderDetailsVm;
use crate::shared::components::Skeleton;
use crate::shared::i18n::use_i18n;
use contracts::domain::a001_order::aggregate::LineItem;
use leptos::prelude::*;
use thaw::*;

const SKELETON_ROWS: usize = 3;

#[component]
pub fn ItemsTable(vm: OrderDetailsVm) -> impl IntoView {
    let i18n = use_i18n();
    let busy = vm.is_busy();
    let order = vm.order;

    let header = {
        let i18n = i18n.clone();
        move || {
            let t = i18n.translator("order");
            let cells = ["product", "sku", "quantity", "price", "amount"]
                .into_iter()
                .map(|key| {
                    let label = t.t(key);
                    view! { <TableHeaderCell>{label}</TableHeaderCell> }
                })
                .collect_view();
            view! { <TableRow>{cells}</TableRow> }
        }
    };

    view! {
        <Card>
            <h4 class="details-section__title">{let i18n = i18n.clone(); move || i18n.t("items")}</h4>
            <Table>
                <TableHeader>{header}</TableHeader>
                <TableBody>
                    {move || {
                        if busy.get() {
                            return (0..SKELETON_ROWS)
                                .map(|_| view! {
                                    <TableRow>
                                        <TableCell><Skeleton width="160px" /></TableCell>
                                        <TableCell><Skeleton width="80px" /></TableCell>
                                        <TableCell><Skeleton width="30px" /></TableCell>
                                        <TableCell><Skeleton width="60px" /></TableCell>
                                        <TableCell><Skeleton width="60px" /></TableCell>
                                    </TableRow>
                                })
                                .collect_view()
                                .into_any();
                        }
                        let Some(o) = order.get() else {
                            return ().into_any();
                        };
                        let currency = o.currency.clone();
                        o.items
                            .into_iter()
                            .map(|item| item_row(item, &currency))
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </Card>
    }
}

fn item_row(item: LineItem, currency: &str) -> impl IntoView {
    let price = money_label(currency, item.price);
    let amount = money_label(currency, item.amount());
    let LineItem {
        name,
        sku,
        image_url,
        quantity,
        ..
    } = item;
    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <div class="item-cell">
                        {image_url.map(|src| view! { <img class="item-cell__image" src=src alt="" /> })}
                        <span>{name}</span>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>{sku}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{amount}</TableCellLayout></TableCell>
        </TableRow>
    }
}
