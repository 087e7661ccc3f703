//! Customer, shipping and payment block

use super::super::view_model::OrderDetailsVm;
use crate::shared::components::Skeleton;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderInfo(vm: OrderDetailsVm) -> impl IntoView {
    let i18n = use_i18n();
    let busy = vm.is_busy();
    let order = vm.order;

    view! {
        <Card>
            {move || {
                let t = i18n.translator("order");
                let rows: Vec<(String, Option<String>)> = match order.get().filter(|_| !busy.get()) {
                    Some(o) => vec![
                        (t.t("order-code"), Some(o.code.clone())),
                        (t.t("status-label"), Some(t.t(&o.status.translation_key()))),
                        (
                            t.t("created-at"),
                            Some(o.metadata.created_at.format("%Y-%m-%d %H:%M").to_string()),
                        ),
                        (t.t("customer"), Some(customer_line(&o.customer.name, &o.customer.email))),
                        (t.t("shipping-address"), Some(o.shipping_address.one_line())),
                        (t.t("payment-method"), Some(o.payment_method.clone())),
                    ],
                    None => ["order-code", "status-label", "created-at", "customer", "shipping-address", "payment-method"]
                        .into_iter()
                        .map(|key| (t.t(key), None))
                        .collect(),
                };

                view! {
                    <h4 class="details-section__title">{t.t("order-details")}</h4>
                    <dl class="details-grid">
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>
                                    {match value {
                                        Some(v) if v.is_empty() => "—".to_string().into_any(),
                                        Some(v) => v.into_any(),
                                        None => view! { <Skeleton width="140px" /> }.into_any(),
                                    }}
                                </dd>
                            })
                            .collect_view()}
                    </dl>
                }
            }}
        </Card>
    }
}

fn customer_line(name: &str, email: &str) -> String {
    match (name.is_empty(), email.is_empty()) {
        (false, false) => format!("{} <{}>", name, email),
        (false, true) => name.to_string(),
        _ => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::customer_line;

    #[test]
    fn customer_line_skips_missing_parts() {
        assert_eq!(customer_line("Ann", "ann@x.io"), "Ann <ann@x.io>");
        assert_eq!(customer_line("Ann", ""), "Ann");
        assert_eq!(customer_line("", "ann@x.io"), "ann@x.io");
        assert_eq!(customer_line("", ""), "");
    }
}
