//! Page decisions for the order details screen, kept free of signals and DOM
//! so every branch can be unit tested.

use crate::shared::i18n::Translator;
use crate::shared::notifications::NotificationKind;
use contracts::domain::a001_order::aggregate::Order;
use contracts::shared::api_response::DeleteOrderResponse;

pub const GENERIC_ERROR_KEY: &str = "common:errors.something-wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    OrdersList,
    NotFound,
}

impl NavigationTarget {
    pub fn path(&self) -> &'static str {
        match self {
            NavigationTarget::OrdersList => "/orders",
            NavigationTarget::NotFound => "/404",
        }
    }
}

/// Результат загрузки заказа
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(Order),
    Redirect(NavigationTarget),
}

/// Any failure, including a `success: false` envelope, leaves the page.
pub fn fetch_outcome(result: Result<Order, String>) -> FetchOutcome {
    match result {
        Ok(order) => FetchOutcome::Loaded(order),
        Err(e) => {
            log::warn!("Order fetch failed: {}", e);
            FetchOutcome::Redirect(NavigationTarget::NotFound)
        }
    }
}

/// What the page does once a delete request settles: one toast, one navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub kind: NotificationKind,
    /// Translation key of the toast text
    pub message_key: String,
    pub navigate_to: NavigationTarget,
}

pub fn delete_outcome(result: Result<DeleteOrderResponse, String>) -> DeleteOutcome {
    match result {
        Ok(resp) if resp.success => DeleteOutcome {
            kind: NotificationKind::Success,
            message_key: format!("common:errors.{}", resp.message),
            navigate_to: NavigationTarget::OrdersList,
        },
        Ok(resp) => {
            log::warn!("Order delete rejected: {}", resp.message);
            delete_failed()
        }
        Err(e) => {
            log::warn!("Order delete failed: {}", e);
            delete_failed()
        }
    }
}

fn delete_failed() -> DeleteOutcome {
    DeleteOutcome {
        kind: NotificationKind::Error,
        message_key: GENERIC_ERROR_KEY.to_string(),
        navigate_to: NavigationTarget::NotFound,
    }
}

/// Tracks the order id whose fetch is in flight.
///
/// `begin` refuses a second load of the same id; `finish` tells whether a
/// settled response still belongs to the latest load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadTracker {
    in_flight: Option<String>,
}

impl LoadTracker {
    pub fn begin(&mut self, id: &str) -> bool {
        if self.in_flight.as_deref() == Some(id) {
            return false;
        }
        self.in_flight = Some(id.to_string());
        true
    }

    /// `false` for a response superseded by a newer load
    pub fn finish(&mut self, id: &str) -> bool {
        if self.in_flight.as_deref() != Some(id) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Id to delete, or `None` when nothing is loaded or a delete is pending.
pub fn delete_target(order_id: Option<String>, deleting: bool) -> Option<String> {
    order_id.filter(|_| !deleting)
}

/// Applies a settled delete: exactly one toast, then exactly one navigation.
pub fn settle_delete(
    outcome: &DeleteOutcome,
    t: &Translator,
    mut notify: impl FnMut(NotificationKind, String),
    mut navigate: impl FnMut(NavigationTarget),
) {
    notify(outcome.kind, t.t(&outcome.message_key));
    navigate(outcome.navigate_to);
}

pub fn is_busy(fetch_loading: bool, delete_pending: bool) -> bool {
    fetch_loading || delete_pending
}

pub fn money_label(currency: &str, value: f64) -> String {
    format!("{} {}", currency, value)
}

/// Строки блока итогов, значения берутся с сервера без пересчёта
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsView {
    pub sub_total: String,
    pub shipping: String,
    pub total: String,
}

impl TotalsView {
    pub fn from_order(order: &Order) -> Self {
        Self {
            sub_total: money_label(&order.currency, order.sub_total),
            shipping: money_label(&order.currency, order.shipping),
            total: money_label(&order.currency, order.total),
        }
    }
}

/// "1 Item", "0 Items", "3 Items"
pub fn item_count_label(count: usize, t: &Translator) -> String {
    let key = if count == 1 { "order:item" } else { "order:items" };
    format!("{} {}", count, t.t(key))
}

/// Header block of the page: either skeletons or the real values.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    Placeholder,
    Ready {
        order_id: String,
        item_count: String,
        totals: TotalsView,
    },
}

pub fn summary_view(busy: bool, order: Option<&Order>, t: &Translator) -> SummaryView {
    match order {
        Some(order) if !busy => SummaryView::Ready {
            order_id: order.to_string_id(),
            item_count: item_count_label(order.item_count(), t),
            totals: TotalsView::from_order(order),
        },
        _ => SummaryView::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Language;
    use contracts::domain::a001_order::aggregate::{LineItem, OrderDto};

    fn order(currency: &str, items: usize, sub_total: f64, shipping: f64) -> Order {
        OrderDto {
            code: Some("ORD-T".into()),
            currency: currency.into(),
            items: (0..items)
                .map(|i| LineItem {
                    name: format!("Item {}", i),
                    sku: String::new(),
                    image_url: None,
                    quantity: 1,
                    price: 1.0,
                })
                .collect(),
            sub_total,
            shipping,
            total: sub_total + shipping,
            ..Default::default()
        }
        .into_order()
    }

    fn en() -> Translator {
        Translator::new(Language::En, "order")
    }

    #[test]
    fn totals_are_currency_then_server_value() {
        let totals = TotalsView::from_order(&order("USD", 2, 100.0, 12.5));
        assert_eq!(totals.sub_total, "USD 100");
        assert_eq!(totals.shipping, "USD 12.5");
        assert_eq!(totals.total, "USD 112.5");
    }

    #[test]
    fn totals_do_not_recompute() {
        let mut o = order("EUR", 1, 10.0, 0.0);
        o.total = 99.99;
        assert_eq!(TotalsView::from_order(&o).total, "EUR 99.99");
    }

    #[test]
    fn failed_fetch_redirects_to_not_found() {
        assert_eq!(
            fetch_outcome(Err("order-not-found".into())),
            FetchOutcome::Redirect(NavigationTarget::NotFound)
        );
        let o = order("USD", 1, 1.0, 0.0);
        assert_eq!(fetch_outcome(Ok(o.clone())), FetchOutcome::Loaded(o));
    }

    #[test]
    fn delete_success_toasts_server_message_and_goes_to_list() {
        let outcome = delete_outcome(Ok(DeleteOrderResponse::deleted()));
        assert_eq!(outcome.kind, NotificationKind::Success);
        assert_eq!(outcome.message_key, "common:errors.order-deleted");
        assert_eq!(outcome.navigate_to.path(), "/orders");
        assert_eq!(en().t(&outcome.message_key), "Order deleted successfully");
    }

    #[test]
    fn delete_failure_is_generic_error_and_not_found() {
        let rejected = DeleteOrderResponse {
            success: false,
            message: "order-not-found".into(),
        };
        for outcome in [
            delete_outcome(Ok(rejected)),
            delete_outcome(Err("Failed to fetch".into())),
        ] {
            assert_eq!(outcome.kind, NotificationKind::Error);
            assert_eq!(outcome.message_key, GENERIC_ERROR_KEY);
            assert_eq!(outcome.navigate_to.path(), "/404");
        }
        assert_eq!(en().t(GENERIC_ERROR_KEY), "Something Is Wrong!");
    }

    #[test]
    fn second_load_of_same_id_is_skipped() {
        let mut tracker = LoadTracker::default();
        assert!(tracker.begin("a"));
        assert!(!tracker.begin("a"));
        assert!(tracker.is_loading());

        assert!(tracker.finish("a"));
        assert!(!tracker.is_loading());
        // settled loads do not block a refetch
        assert!(tracker.begin("a"));
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut tracker = LoadTracker::default();
        assert!(tracker.begin("a"));
        assert!(tracker.begin("b"));

        assert!(!tracker.finish("a"));
        assert!(tracker.is_loading());
        assert!(tracker.finish("b"));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn delete_needs_a_loaded_order_and_no_pending_delete() {
        assert_eq!(delete_target(Some("x".into()), false), Some("x".to_string()));
        assert_eq!(delete_target(Some("x".into()), true), None);
        assert_eq!(delete_target(None, false), None);
    }

    #[test]
    fn settled_delete_notifies_and_navigates_once() {
        let t = en();
        for (result, kind, target, text) in [
            (
                Ok(DeleteOrderResponse::deleted()),
                NotificationKind::Success,
                NavigationTarget::OrdersList,
                "Order deleted successfully",
            ),
            (
                Err("Failed to delete".to_string()),
                NotificationKind::Error,
                NavigationTarget::NotFound,
                "Something Is Wrong!",
            ),
        ] {
            let mut toasts = Vec::new();
            let mut navigations = Vec::new();
            settle_delete(
                &delete_outcome(result),
                &t,
                |k, msg| toasts.push((k, msg)),
                |to| navigations.push(to),
            );
            assert_eq!(toasts, vec![(kind, text.to_string())]);
            assert_eq!(navigations, vec![target]);
        }
    }

    #[test]
    fn busy_when_either_flag_is_set() {
        assert!(!is_busy(false, false));
        assert!(is_busy(true, false));
        assert!(is_busy(false, true));
        assert!(is_busy(true, true));
    }

    #[test]
    fn item_count_is_singular_only_for_one() {
        let t = en();
        assert_eq!(item_count_label(1, &t), "1 Item");
        assert_eq!(item_count_label(0, &t), "0 Items");
        assert_eq!(item_count_label(3, &t), "3 Items");
    }

    #[test]
    fn busy_summary_hides_every_value() {
        let t = en();
        let o = order("USD", 1, 5.0, 1.0);
        assert_eq!(summary_view(true, Some(&o), &t), SummaryView::Placeholder);
        assert_eq!(summary_view(false, None, &t), SummaryView::Placeholder);

        match summary_view(false, Some(&o), &t) {
            SummaryView::Ready {
                order_id,
                item_count,
                totals,
            } => {
                assert_eq!(order_id, o.to_string_id());
                assert_eq!(item_count, "1 Item");
                assert_eq!(totals.total, "USD 6");
            }
            SummaryView::Placeholder => panic!("expected values"),
        }
    }
}
