use crate::domain::a001_order::ui::details::state::{item_count_label, money_label};
use crate::shared::api_utils::{api_base, read_envelope};
use crate::shared::i18n::Translator;
use contracts::domain::a001_order::aggregate::Order;
use gloo_net::http::Request;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let url = format!("{}/api/a001/orders", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch orders: {}", e))?;
    read_envelope(response).await
}

/// Заполняет базу демонстрационными заказами; возвращает их id
pub async fn insert_test_data() -> Result<Vec<String>, String> {
    let url = format!("{}/api/a001/orders/testdata", api_base());
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to insert test data: {}", e))?;
    read_envelope(response).await
}

pub const COLUMN_KEYS: [&str; 6] = [
    "order-code",
    "customer",
    "items",
    "total",
    "status-label",
    "created-at",
];

/// Одна строка таблицы заказов, уже переведённая
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub href: String,
    pub code: String,
    pub customer: String,
    pub items: String,
    pub total: String,
    pub status: String,
    pub created_at: String,
}

impl OrderRow {
    pub fn new(order: &Order, t: &Translator) -> Self {
        Self {
            href: format!("/orders/{}", order.to_string_id()),
            code: order.code.clone(),
            customer: order.customer.name.clone(),
            items: item_count_label(order.item_count(), t),
            total: money_label(&order.currency, order.total),
            status: t.t(&order.status.translation_key()),
            created_at: order.metadata.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Language;
    use contracts::domain::a001_order::aggregate::{LineItem, OrderDto};

    #[test]
    fn row_is_translated_once_per_language() {
        let order = OrderDto {
            code: Some("ORD-7".into()),
            currency: "USD".into(),
            items: vec![LineItem {
                name: "Lamp".into(),
                sku: "L-1".into(),
                image_url: None,
                quantity: 2,
                price: 5.0,
            }],
            total: 10.0,
            ..Default::default()
        }
        .into_order();

        let en = OrderRow::new(&order, &Translator::new(Language::En, "order"));
        assert_eq!(en.href, format!("/orders/{}", order.to_string_id()));
        assert_eq!(en.code, "ORD-7");
        assert_eq!(en.items, "1 Item");
        assert_eq!(en.total, "USD 10");

        let ru = OrderRow::new(&order, &Translator::new(Language::Ru, "order"));
        assert_eq!(ru.code, en.code);
        assert_ne!(ru.items, en.items);
    }

    #[test]
    fn every_column_has_a_label() {
        let t = Translator::new(Language::En, "order");
        for key in COLUMN_KEYS {
            assert_ne!(t.t(key), key, "column {}", key);
        }
    }
}
