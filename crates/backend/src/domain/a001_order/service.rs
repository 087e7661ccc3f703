use contracts::domain::a001_order::aggregate::{
    Customer, LineItem, Order, OrderDto, OrderStatus, ShippingAddress,
};
use sea_orm::DatabaseConnection;
use thiserror::Error;
use uuid::Uuid;

use super::repository;
use crate::shared::data::db::get_connection;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Получение заказа по ID
pub async fn get_by_id(id: Uuid) -> Result<Order, OrderError> {
    get_by_id_in(conn(), id).await
}

pub async fn get_by_id_in(db: &DatabaseConnection, id: Uuid) -> Result<Order, OrderError> {
    repository::get_by_id(db, id)
        .await?
        .ok_or(OrderError::NotFound(id))
}

pub async fn list_all() -> Result<Vec<Order>, OrderError> {
    Ok(repository::list_all(conn()).await?)
}

/// Создание заказа с валидацией сумм
pub async fn create(dto: OrderDto) -> Result<Uuid, OrderError> {
    create_in(conn(), dto).await
}

pub async fn create_in(db: &DatabaseConnection, dto: OrderDto) -> Result<Uuid, OrderError> {
    let order = dto.into_order();
    order.validate().map_err(OrderError::Validation)?;
    let id = repository::insert(db, &order).await?;
    tracing::info!("Order {} ({}) created", order.code, id);
    Ok(id)
}

/// Смена статуса. Повторная установка того же статуса ничего не пишет.
pub async fn update_status(id: Uuid, status: OrderStatus) -> Result<Order, OrderError> {
    update_status_in(conn(), id, status).await
}

pub async fn update_status_in(
    db: &DatabaseConnection,
    id: Uuid,
    status: OrderStatus,
) -> Result<Order, OrderError> {
    let mut order = get_by_id_in(db, id).await?;
    let previous = order.status;
    if !order.set_status(status) {
        return Ok(order);
    }
    if !repository::update_status(db, &order).await? {
        return Err(OrderError::NotFound(id));
    }
    tracing::info!("Order {}: status {} -> {}", id, previous, status);
    Ok(order)
}

/// Мягкое удаление заказа
pub async fn delete(id: Uuid) -> Result<(), OrderError> {
    delete_in(conn(), id).await
}

pub async fn delete_in(db: &DatabaseConnection, id: Uuid) -> Result<(), OrderError> {
    if repository::soft_delete(db, id).await? {
        tracing::info!("Order {} deleted", id);
        Ok(())
    } else {
        Err(OrderError::NotFound(id))
    }
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> Result<Vec<Uuid>, OrderError> {
    let mut ids = Vec::new();
    for dto in demo_orders() {
        ids.push(create(dto).await?);
    }
    Ok(ids)
}

fn item(name: &str, sku: &str, quantity: u32, price: f64) -> LineItem {
    LineItem {
        name: name.into(),
        sku: sku.into(),
        image_url: None,
        quantity,
        price,
    }
}

pub fn demo_orders() -> Vec<OrderDto> {
    vec![
        OrderDto {
            code: Some("ORD-1001".into()),
            currency: "USD".into(),
            items: vec![
                item("Canvas backpack", "BAG-CNV-01", 1, 59.0),
                item("Steel water bottle", "BTL-STL-05", 2, 18.5),
            ],
            sub_total: 96.0,
            shipping: 7.5,
            total: 103.5,
            status: Some(OrderStatus::Pending),
            payment_method: "card".into(),
            customer: Customer {
                name: "Jordan Lee".into(),
                email: "jordan.lee@example.com".into(),
                phone: "+1 555 0101".into(),
            },
            shipping_address: ShippingAddress {
                address: "12 Elm Street".into(),
                city: "Portland".into(),
                zip: "97201".into(),
                country: "US".into(),
            },
        },
        OrderDto {
            code: Some("ORD-1002".into()),
            currency: "EUR".into(),
            items: vec![item("Desk lamp", "LMP-DSK-02", 1, 42.0)],
            sub_total: 42.0,
            shipping: 0.0,
            total: 42.0,
            status: Some(OrderStatus::OnTheWay),
            payment_method: "cash on delivery".into(),
            customer: Customer {
                name: "Sam Novak".into(),
                email: "sam.novak@example.com".into(),
                phone: String::new(),
            },
            shipping_address: ShippingAddress {
                address: "Hauptstrasse 5".into(),
                city: "Berlin".into(),
                zip: "10115".into(),
                country: "DE".into(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    async fn memory_db() -> DatabaseConnection {
        db::connect("sqlite::memory:").await.unwrap()
    }

    #[test]
    fn demo_orders_are_valid() {
        for dto in demo_orders() {
            let order = dto.into_order();
            assert!(order.validate().is_ok(), "{} invalid", order.code);
        }
    }

    #[tokio::test]
    async fn create_rejects_invalid_totals() {
        let db = memory_db().await;
        let mut dto = demo_orders().remove(0);
        dto.total = 1.0;
        let err = create_in(&db, dto).await.unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
    }

    #[tokio::test]
    async fn get_missing_order_is_not_found() {
        let db = memory_db().await;
        let id = Uuid::new_v4();
        match get_by_id_in(&db, id).await {
            Err(OrderError::NotFound(missing)) => assert_eq!(missing, id),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let db = memory_db().await;
        let id = create_in(&db, demo_orders().remove(1)).await.unwrap();
        delete_in(&db, id).await.unwrap();
        assert!(matches!(
            delete_in(&db, id).await,
            Err(OrderError::NotFound(_))
        ));
        assert!(matches!(
            get_by_id_in(&db, id).await,
            Err(OrderError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn same_status_is_noop() {
        let db = memory_db().await;
        let id = create_in(&db, demo_orders().remove(0)).await.unwrap();

        let unchanged = update_status_in(&db, id, OrderStatus::Pending).await.unwrap();
        assert_eq!(unchanged.metadata.version, 0);

        let changed = update_status_in(&db, id, OrderStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(changed.status, OrderStatus::Cancelled);
        assert_eq!(
            get_by_id_in(&db, id).await.unwrap().status,
            OrderStatus::Cancelled
        );
    }
}
