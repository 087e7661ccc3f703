use super::super::state::{summary_view, SummaryView};
use super::super::view_model::OrderDetailsVm;
use crate::shared::components::Skeleton;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

/// Subtotal, shipping and total rows exactly as the server reported them
#[component]
pub fn TotalsCard(vm: OrderDetailsVm) -> impl IntoView {
    let i18n = use_i18n();
    let busy = vm.is_busy();
    let order = vm.order;

    view! {
        <Card>
            <div class="totals">
                {move || {
                    let t = i18n.translator("order");
                    let values = match order.with(|o| summary_view(busy.get(), o.as_ref(), &t)) {
                        SummaryView::Ready { totals, .. } => {
                            Some([totals.sub_total, totals.shipping, totals.total])
                        }
                        SummaryView::Placeholder => None,
                    };
                    ["subtotal", "shipping-fee", "total"]
                        .into_iter()
                        .enumerate()
                        .map(|(i, key)| {
                            let value = match &values {
                                Some(v) => view! { <span>{v[i].clone()}</span> }.into_any(),
                                None => view! { <Skeleton width="80px" /> }.into_any(),
                            };
                            let class = if key == "total" { "totals__row totals__row--grand" } else { "totals__row" };
                            view! {
                                <div class=class>
                                    <span class="totals__label">{t.t(key)}</span>
                                    <span class="totals__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Card>
    }
}
