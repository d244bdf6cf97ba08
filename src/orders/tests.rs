use std::sync::Arc;

use super::model::{NewOrder, initial_status, is_known_status};
use super::OrderService;
use crate::broker::{ADMIN_NEW_ORDERS, Broker, TryRecvError, order_topic};
use crate::persistence::SledOrderStore;
use crate::utils::error::OrderError;

fn pizza() -> NewOrder {
    NewOrder {
        customer_name: "Alice".to_string(),
        phone: "0912345678".to_string(),
        address: "1 Main Street".to_string(),
        size: "Medium".to_string(),
        pizza_types: vec!["Pepperoni".to_string(), "Veggie".to_string()],
        instructions: "extra napkins".to_string(),
    }
}

fn service() -> (OrderService, Arc<Broker>) {
    let broker = Arc::new(Broker::default());
    let store = Arc::new(SledOrderStore::temporary().unwrap());
    (OrderService::new(store, broker.clone()), broker)
}

#[test]
fn test_validate_accepts_catalogue_order() {
    assert!(pizza().validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_fields() {
    let mut order = pizza();
    order.size = "Huge".to_string();
    assert!(order.validate().unwrap_err().contains("Huge"));

    let mut order = pizza();
    order.pizza_types = vec!["Pineapple".to_string()];
    assert!(order.validate().unwrap_err().contains("Pineapple"));

    let mut order = pizza();
    order.pizza_types.clear();
    assert!(order.validate().is_err());

    let mut order = pizza();
    order.customer_name = "  ".to_string();
    assert!(order.validate().is_err());
}

#[test]
fn test_statuses() {
    assert_eq!(initial_status(), "Order placed");
    assert!(is_known_status("Quality Check"));
    assert!(!is_known_status("Delivered"));
}

#[test]
fn test_create_order_notifies_admin_feed() {
    let (service, broker) = service();
    let admin = broker.new_subscriber();
    broker.subscribe(ADMIN_NEW_ORDERS, &admin);

    let order = service.create_order(pizza()).unwrap();

    assert_eq!(
        admin.mailbox().try_recv().unwrap(),
        format!("New order #{} from Alice", order.id)
    );
}

#[test]
fn test_invalid_order_is_not_stored_or_published() {
    let (service, broker) = service();
    let admin = broker.new_subscriber();
    broker.subscribe(ADMIN_NEW_ORDERS, &admin);

    let mut order = pizza();
    order.size = "Tiny".to_string();
    assert!(matches!(
        service.create_order(order),
        Err(OrderError::Invalid(_))
    ));

    assert!(service.list_orders().unwrap().is_empty());
    assert_eq!(admin.mailbox().try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_update_status_publishes_to_order_topic() {
    let (service, broker) = service();
    let order = service.create_order(pizza()).unwrap();
    let watcher = broker.new_subscriber();
    broker.subscribe(&order_topic(order.id), &watcher);

    let updated = service.update_status(order.id, "Preparing").unwrap();

    assert_eq!(updated.status, "Preparing");
    assert_eq!(watcher.mailbox().try_recv().unwrap(), "Preparing");
}

#[test]
fn test_update_status_rejects_unknown_status() {
    let (service, broker) = service();
    let order = service.create_order(pizza()).unwrap();
    let watcher = broker.new_subscriber();
    broker.subscribe(&order_topic(order.id), &watcher);

    let err = service.update_status(order.id, "Eaten").unwrap_err();

    assert!(matches!(err, OrderError::UnknownStatus(_)));
    assert_eq!(service.get_order(order.id).unwrap().status, "Order placed");
    assert_eq!(watcher.mailbox().try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_update_status_of_missing_order_publishes_nothing() {
    let (service, broker) = service();
    let watcher = broker.new_subscriber();
    broker.subscribe(&order_topic(404), &watcher);

    let err = service.update_status(404, "Baking").unwrap_err();

    assert!(matches!(err, OrderError::NotFound(404)));
    assert_eq!(watcher.mailbox().try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_update_status_without_watchers_succeeds() {
    let (service, broker) = service();
    let order = service.create_order(pizza()).unwrap();

    service.update_status(order.id, "Ready").unwrap();

    assert!(!broker.has_topic(&order_topic(order.id)));
}

#[test]
fn test_get_exists_and_delete() {
    let (service, _broker) = service();
    let order = service.create_order(pizza()).unwrap();

    assert!(service.order_exists(order.id).unwrap());
    assert_eq!(service.get_order(order.id).unwrap().id, order.id);

    service.delete_order(order.id).unwrap();
    assert!(!service.order_exists(order.id).unwrap());
    assert!(matches!(
        service.get_order(order.id),
        Err(OrderError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_order(order.id),
        Err(OrderError::NotFound(_))
    ));
}
