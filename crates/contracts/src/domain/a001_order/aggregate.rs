use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s.trim())
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    OnTheWay,
    Delivered,
    Returned,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::OnTheWay,
        OrderStatus::Delivered,
        OrderStatus::Returned,
        OrderStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::OnTheWay => "on-the-way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Returned => "returned",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Ключ перевода, например `order:status.on-the-way`
    pub fn translation_key(&self) -> String {
        format!("order:status.{}", self.code())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Nested parts
// ============================================================================

/// One purchased entry of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
    pub price: f64,
}

impl LineItem {
    /// Line amount for display in the items table.
    pub fn amount(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub zip: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn one_line(&self) -> String {
        [
            self.address.as_str(),
            self.city.as_str(),
            self.zip.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ покупателя
///
/// Денежные поля приходят с сервера как есть: `total` ожидается равным
/// `sub_total + shipping`, но клиент его не пересчитывает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub code: String,
    pub currency: String,
    pub items: Vec<LineItem>,
    pub sub_total: f64,
    pub shipping: f64,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Order {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Смена статуса; возвращает `false`, если статус не изменился
    pub fn set_status(&mut self, status: OrderStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.metadata.touch();
        true
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.currency.trim().is_empty() {
            return Err("Currency must not be empty".into());
        }
        if self.items.is_empty() {
            return Err("Order must contain at least one item".into());
        }
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err("Item name must not be empty".into());
            }
            if item.quantity == 0 {
                return Err(format!("Item '{}' has zero quantity", item.name));
            }
            if item.price < 0.0 {
                return Err(format!("Item '{}' has a negative price", item.name));
            }
        }
        if self.sub_total < 0.0 || self.shipping < 0.0 || self.total < 0.0 {
            return Err("Money fields must not be negative".into());
        }
        if (self.sub_total + self.shipping - self.total).abs() > 0.005 {
            return Err(format!(
                "Total {} does not match subtotal {} + shipping {}",
                self.total, self.sub_total, self.shipping
            ));
        }
        Ok(())
    }
}

/// Имя файла счёта для скачивания
pub fn invoice_file_name(id: &str) -> String {
    format!("INVOICE-{}", id)
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания заказа
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub code: Option<String>,
    pub currency: String,
    pub items: Vec<LineItem>,
    pub sub_total: f64,
    pub shipping: f64,
    pub total: f64,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
}

impl OrderDto {
    pub fn into_order(self) -> Order {
        let id = OrderId::new_v4();
        let code = self
            .code
            .unwrap_or_else(|| format!("ORD-{}", &id.as_string()[..8]));
        Order {
            id,
            code,
            currency: self.currency,
            items: self.items,
            sub_total: self.sub_total,
            shipping: self.shipping,
            total: self.total,
            status: self.status.unwrap_or_default(),
            payment_method: self.payment_method,
            customer: self.customer,
            shipping_address: self.shipping_address,
            metadata: EntityMetadata::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
}
