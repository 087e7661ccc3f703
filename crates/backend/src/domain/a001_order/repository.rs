use chrono::Utc;
use contracts::domain::a001_order::aggregate::{
    Customer, LineItem, Order, OrderId, OrderStatus, ShippingAddress,
};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub sub_total: f64,
    pub shipping: f64,
    pub total: f64,
    pub items_json: String,
    pub customer_json: String,
    pub shipping_address_json: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Order {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&m.id)
            .map_err(|e| anyhow::anyhow!("Broken order id '{}': {}", m.id, e))?;
        let items: Vec<LineItem> = serde_json::from_str(&m.items_json)
            .map_err(|e| anyhow::anyhow!("Failed to deserialize items_json for {}: {}", m.id, e))?;
        let customer: Customer = decode_or_default(&m.customer_json, "customer_json", &m.id);
        let shipping_address: ShippingAddress =
            decode_or_default(&m.shipping_address_json, "shipping_address_json", &m.id);
        let status = OrderStatus::from_code(&m.status).unwrap_or_else(|| {
            tracing::warn!("Unknown status '{}' for order {}", m.status, m.id);
            OrderStatus::Pending
        });

        Ok(Order {
            id: OrderId(id),
            code: m.code,
            currency: m.currency,
            items,
            sub_total: m.sub_total,
            shipping: m.shipping,
            total: m.total,
            status,
            payment_method: m.payment_method,
            customer,
            shipping_address,
            metadata: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
                updated_at: m.updated_at.unwrap_or_else(Utc::now),
                version: m.version,
            },
        })
    }
}

/// Optional JSON columns: a broken value is logged and the order still loads.
fn decode_or_default<T: DeserializeOwned + Default>(json: &str, column: &str, order_id: &str) -> T {
    match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Broken {} for order {}, using empty value: {}", column, order_id, e);
            T::default()
        }
    }
}

fn into_orders(models: Vec<Model>) -> Vec<Order> {
    models
        .into_iter()
        .filter_map(|m| {
            let id = m.id.clone();
            match Order::try_from(m) {
                Ok(order) => Some(order),
                Err(e) => {
                    tracing::error!("Skipping unreadable order {}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

/// Все неудалённые заказы, новые первыми
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Order>> {
    let models = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(into_orders(models))
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<Option<Order>> {
    let model = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await?;
    model.map(Order::try_from).transpose()
}

pub async fn insert(db: &DatabaseConnection, order: &Order) -> anyhow::Result<Uuid> {
    let uuid = order.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(order.code.clone()),
        currency: Set(order.currency.clone()),
        status: Set(order.status.code().to_string()),
        payment_method: Set(order.payment_method.clone()),
        sub_total: Set(order.sub_total),
        shipping: Set(order.shipping),
        total: Set(order.total),
        items_json: Set(serde_json::to_string(&order.items)?),
        customer_json: Set(serde_json::to_string(&order.customer)?),
        shipping_address_json: Set(serde_json::to_string(&order.shipping_address)?),
        is_deleted: Set(false),
        created_at: Set(Some(order.metadata.created_at)),
        updated_at: Set(Some(order.metadata.updated_at)),
        version: Set(order.metadata.version),
    };
    active.insert(db).await?;
    Ok(uuid)
}

/// Записывает статус и метаданные; `false`, если строка не найдена
pub async fn update_status(db: &DatabaseConnection, order: &Order) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(order.status.code()))
        .col_expr(Column::UpdatedAt, Expr::value(order.metadata.updated_at))
        .col_expr(Column::Version, Expr::value(order.metadata.version))
        .filter(Column::Id.eq(order.id.value().to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn soft_delete(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use contracts::domain::a001_order::aggregate::OrderDto;

    async fn memory_db() -> DatabaseConnection {
        db::connect("sqlite::memory:").await.unwrap()
    }

    fn order(code: &str) -> Order {
        OrderDto {
            code: Some(code.into()),
            currency: "EUR".into(),
            items: vec![LineItem {
                name: "Lamp".into(),
                sku: "LMP".into(),
                image_url: None,
                quantity: 1,
                price: 40.0,
            }],
            sub_total: 40.0,
            shipping: 4.5,
            total: 44.5,
            customer: Customer {
                name: "Ann".into(),
                email: "ann@example.com".into(),
                phone: String::new(),
            },
            ..Default::default()
        }
        .into_order()
    }

    #[tokio::test]
    async fn insert_then_get_returns_same_order() {
        let db = memory_db().await;
        let original = order("ORD-A");
        let id = insert(&db, &original).await.unwrap();

        let loaded = get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(loaded.code, "ORD-A");
        assert_eq!(loaded.items, original.items);
        assert_eq!(loaded.customer.email, "ann@example.com");
        assert_eq!(loaded.total, 44.5);
        assert_eq!(loaded.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn soft_deleted_order_is_invisible() {
        let db = memory_db().await;
        let id = insert(&db, &order("ORD-B")).await.unwrap();

        assert!(soft_delete(&db, id).await.unwrap());
        assert!(get_by_id(&db, id).await.unwrap().is_none());
        assert!(list_all(&db).await.unwrap().is_empty());
        // second delete finds nothing
        assert!(!soft_delete(&db, id).await.unwrap());
    }

    #[tokio::test]
    async fn update_status_persists() {
        let db = memory_db().await;
        let mut o = order("ORD-C");
        insert(&db, &o).await.unwrap();

        o.set_status(OrderStatus::Delivered);
        assert!(update_status(&db, &o).await.unwrap());

        let loaded = get_by_id(&db, o.id.value()).await.unwrap().unwrap();
        assert_eq!(loaded.status, OrderStatus::Delivered);
        assert_eq!(loaded.metadata.version, 1);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let db = memory_db().await;
        assert!(get_by_id(&db, Uuid::new_v4()).await.unwrap().is_none());
        assert!(!soft_delete(&db, Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn broken_customer_json_loads_with_empty_customer() {
        use sea_orm::sea_query::Expr;
        let db = memory_db().await;
        let original = order("ORD-D");
        let id = insert(&db, &original).await.unwrap();
        Entity::update_many()
            .col_expr(Column::CustomerJson, Expr::value("{not json"))
            .col_expr(Column::ShippingAddressJson, Expr::value(""))
            .filter(Column::Id.eq(id.to_string()))
            .exec(&db)
            .await
            .unwrap();

        let loaded = get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(loaded.customer, Customer::default());
        assert_eq!(loaded.shipping_address, ShippingAddress::default());
        assert_eq!(loaded.items, original.items);
        assert_eq!(list_all(&db).await.unwrap().len(), 1);
    }

    #[test]
    fn decode_or_default_keeps_valid_json() {
        let customer: Customer =
            decode_or_default(r#"{"name":"Bo","email":"","phone":""}"#, "customer_json", "x");
        assert_eq!(customer.name, "Bo");
        let broken: Customer = decode_or_default("null", "customer_json", "x");
        assert_eq!(broken, Customer::default());
    }
}
