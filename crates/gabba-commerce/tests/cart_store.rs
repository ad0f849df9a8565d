//! End-to-end cart store behaviour over both storage backends.

use std::cell::RefCell;
use std::rc::Rc;

use gabba_cache::{FileStore, KeyValueStore, MemoryStore};
use gabba_commerce::prelude::*;

fn add_hoodie<S: KeyValueStore>(store: &mut CartStore<S>) {
    store
        .add_item("Hoodie", Money::new(80000), "img1.png", Some("adults"))
        .unwrap();
}

#[test]
fn test_same_product_twice_makes_one_line() {
    let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
    add_hoodie(&mut store);
    add_hoodie(&mut store);

    assert_eq!(store.len(), 1);
    assert_eq!(store.lines()[0].quantity, 2);

    let totals = store.compute_totals().unwrap();
    assert_eq!(totals.item_count, 2);
    assert_eq!(totals.subtotal, Money::new(160000));
    assert_eq!(totals.shipping, Money::new(5000));
    assert_eq!(totals.total, Money::new(165000));
}

#[test]
fn test_removing_only_line_empties_cart() {
    let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
    store
        .add_item("Cap", Money::new(30000), "img2.png", None)
        .unwrap();
    let removed = store.remove_item(0).unwrap();

    assert_eq!(removed.name, "Cap");
    assert!(store.is_empty());
    assert_eq!(store.item_count(), 0);
}

#[test]
fn test_restore_reproduces_lines_in_order() {
    let storage = MemoryStore::new();
    let mut store = CartStore::open(storage.clone(), StoreConfig::default());
    add_hoodie(&mut store);
    store
        .add_item("Cap", Money::new(30000), "img2.png", None)
        .unwrap();
    add_hoodie(&mut store);
    store.change_quantity(1, 2).unwrap();

    let reopened = CartStore::open(storage, StoreConfig::default());
    assert_eq!(reopened.lines(), store.lines());
    assert_eq!(
        reopened.compute_totals().unwrap(),
        store.compute_totals().unwrap()
    );
}

#[test]
fn test_clear_then_restore_is_empty() {
    let storage = MemoryStore::new();
    let mut store = CartStore::open(storage.clone(), StoreConfig::default());
    add_hoodie(&mut store);
    store.clear();

    assert!(!storage.exists("carrito").unwrap());
    let reopened = CartStore::open(storage, StoreConfig::default());
    assert!(reopened.is_empty());
}

#[test]
fn test_malformed_snapshot_degrades_to_empty_cart() {
    let storage = MemoryStore::new();
    storage.set_raw("carrito", "{not json").unwrap();

    let mut store = CartStore::open(storage.clone(), StoreConfig::default());
    assert!(store.is_empty());

    // The next mutation overwrites the bad snapshot.
    add_hoodie(&mut store);
    let reopened = CartStore::open(storage, StoreConfig::default());
    assert_eq!(reopened.item_count(), 1);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = FileStore::open(dir.path()).unwrap();
        let mut store = CartStore::open(storage, StoreConfig::default());
        add_hoodie(&mut store);
        add_hoodie(&mut store);
        store.set_quantity_input(0, "5").unwrap();
    }

    assert!(dir.path().join("carrito.json").exists());

    let storage = FileStore::open(dir.path()).unwrap();
    let store = CartStore::open(storage, StoreConfig::default());
    assert_eq!(store.lines()[0].quantity, 5);
    assert_eq!(store.compute_totals().unwrap().total, Money::new(405000));
}

#[test]
fn test_badge_follows_every_mutation() {
    let badge = Rc::new(RefCell::new(CartBadge::default()));
    let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
    store.subscribe(Rc::clone(&badge));
    assert_eq!(badge.borrow().text(), "(0)");

    add_hoodie(&mut store);
    add_hoodie(&mut store);
    assert_eq!(badge.borrow().text(), "(2)");

    store.set_quantity(0, 7).unwrap();
    assert_eq!(badge.borrow().text(), "(7)");

    store.change_quantity(0, -7).unwrap();
    assert_eq!(badge.borrow().text(), "(0)");
}

#[test]
fn test_checkout_composes_deep_link() {
    let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
    add_hoodie(&mut store);

    let customer = CustomerInfo {
        name: "Ana".to_string(),
        phone: "3001234567".to_string(),
        city: "Bogotá".to_string(),
        address: "Cra 7 # 12-30".to_string(),
        ..CustomerInfo::default()
    };
    let placed_at = chrono::NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap();

    let summary = store.checkout(&customer, placed_at).unwrap();
    assert!(summary.text.contains("*TOTAL A PAGAR: $ 85.000*"));
    assert!(summary
        .deep_link()
        .starts_with("https://wa.me/573104273591?text="));

    // Checkout does not empty the cart.
    assert_eq!(store.item_count(), 1);
}

#[test]
fn test_checkout_with_blank_field_fails() {
    let toast = Rc::new(RefCell::new(ToastSlot::default()));
    let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
    store.subscribe(Rc::clone(&toast));
    add_hoodie(&mut store);

    let customer = CustomerInfo {
        name: "Ana".to_string(),
        ..CustomerInfo::default()
    };
    let result = store.checkout(&customer, chrono::NaiveDateTime::default());

    assert!(matches!(result, Err(CommerceError::MissingField("phone"))));
    let toast = toast.borrow();
    let current = toast.current().unwrap();
    assert_eq!(current.notification.severity, Severity::Error);
}
