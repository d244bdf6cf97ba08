use super::{OrderStore, SledOrderStore};
use crate::orders::model::NewOrder;
use crate::utils::error::StoreError;

fn new_order(name: &str) -> NewOrder {
    NewOrder {
        customer_name: name.to_string(),
        phone: "0912345678".to_string(),
        address: "1 Main Street".to_string(),
        size: "Large".to_string(),
        pizza_types: vec!["Cheese".to_string()],
        instructions: String::new(),
    }
}

#[test]
fn test_create_and_get() {
    let store = SledOrderStore::temporary().unwrap();
    let order = store.create(new_order("Alice")).unwrap();

    assert!(order.id > 0);
    assert_eq!(order.status, "Order placed");

    let loaded = store.get(order.id).unwrap().expect("order exists");
    assert_eq!(loaded, order);
}

#[test]
fn test_get_unknown_returns_none() {
    let store = SledOrderStore::temporary().unwrap();
    assert!(store.get(12345).unwrap().is_none());
}

#[test]
fn test_ids_are_unique_and_listed_in_order() {
    let store = SledOrderStore::temporary().unwrap();
    let a = store.create(new_order("Alice")).unwrap();
    let b = store.create(new_order("Bob")).unwrap();
    assert!(b.id > a.id);

    let names: Vec<_> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|o| o.customer_name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_update_status() {
    let store = SledOrderStore::temporary().unwrap();
    let order = store.create(new_order("Alice")).unwrap();

    let updated = store.update_status(order.id, "Baking").unwrap();
    assert_eq!(updated.status, "Baking");
    assert_eq!(store.get(order.id).unwrap().unwrap().status, "Baking");
}

#[test]
fn test_update_status_unknown_order() {
    let store = SledOrderStore::temporary().unwrap();
    let err = store.update_status(99, "Baking").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(99)));
}

#[test]
fn test_delete() {
    let store = SledOrderStore::temporary().unwrap();
    let order = store.create(new_order("Alice")).unwrap();

    store.delete(order.id).unwrap();
    assert!(store.get(order.id).unwrap().is_none());
    assert!(matches!(
        store.delete(order.id),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_open_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.db");
    let store = SledOrderStore::open(path.to_str().unwrap()).unwrap();

    let order = store.create(new_order("Dana")).unwrap();
    assert_eq!(store.get(order.id).unwrap(), Some(order));
    assert!(path.exists());
}

#[test]
fn test_update_status_racing_delete_never_resurrects() {
    use std::sync::{Arc, Barrier};
    use std::thread;

    let store = SledOrderStore::temporary().unwrap();

    for _ in 0..300 {
        let order = store.create(new_order("Eve")).unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let updater = {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                store.update_status(order.id, "Baking")
            })
        };
        let deleter = {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                store.delete(order.id)
            })
        };

        let updated = updater.join().unwrap();
        let deleted = deleter.join().unwrap();

        assert!(deleted.is_ok());
        assert!(matches!(updated, Ok(_) | Err(StoreError::NotFound(_))));
        assert!(store.get(order.id).unwrap().is_none());
    }
}
