use plant_cart::pricing::{cart_total, line_subtotal};
use plant_cart::{CartError, CartStore, Item, Money};

fn cactus() -> Item {
    Item::new("Cactus", Money::parse("$10").unwrap(), "A small cactus", "cactus.jpg")
}

fn ficus() -> Item {
    Item::new("Ficus", Money::parse("$15").unwrap(), "A tall ficus", "ficus.jpg")
}

#[test]
fn test_repeated_adds_accumulate_on_one_line() {
    for n in 1..=7u32 {
        let mut cart = CartStore::new();
        for _ in 0..n {
            cart.add_item(&cactus());
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("Cactus"), n);
    }
}

#[test]
fn test_new_lines_append_in_order() {
    let mut cart = CartStore::new();
    cart.add_item(&ficus());
    cart.add_item(&cactus());
    cart.add_item(&ficus());

    let names: Vec<&str> = cart.items().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Ficus", "Cactus"]);
    assert_eq!(cart.quantity_of("Ficus"), 2);
}

#[test]
fn test_add_copies_item_fields() {
    let mut cart = CartStore::new();
    let mut item = cactus();
    cart.add_item(&item);

    // later edits to the catalog entry do not reach the cart line
    item.description = "Repriced".to_string();
    item.cost = Money::from_dollars(99);

    let line = cart.get("Cactus").unwrap();
    assert_eq!(line.description, "A small cactus");
    assert_eq!(line.cost, Money::from_dollars(10));
    assert_eq!(line.image, "cactus.jpg");
    assert_eq!(line.quantity, 1);
}

#[test]
fn test_remove_is_idempotent() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());
    cart.add_item(&ficus());

    cart.remove_item("Cactus");
    cart.remove_item("Cactus");
    cart.remove_item("Cactus");

    assert!(cart.get("Cactus").is_none());
    assert_eq!(cart.len(), 1);

    cart.remove_item("Orchid");
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_update_quantity_sets_exact_value() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());

    cart.update_quantity("Cactus", 12).unwrap();
    assert_eq!(cart.quantity_of("Cactus"), 12);

    cart.update_quantity("Cactus", 1).unwrap();
    assert_eq!(cart.quantity_of("Cactus"), 1);
}

#[test]
fn test_update_quantity_unknown_name_is_noop() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());
    let before = cart.clone();

    cart.update_quantity("Ficus", 5).unwrap();
    assert_eq!(cart, before);
    assert_eq!(cart.quantity_of("Ficus"), 0);
}

#[test]
fn test_update_quantity_rejects_zero() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());
    cart.add_item(&cactus());

    let err = cart.update_quantity("Cactus", 0).unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity { quantity: 0, .. }));
    assert_eq!(cart.quantity_of("Cactus"), 2);
}

#[test]
fn test_total_is_sum_of_subtotals() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());
    cart.add_item(&ficus());
    cart.update_quantity("Ficus", 3).unwrap();

    let sum: Money = cart.items().iter().map(|l| l.subtotal()).sum();
    assert_eq!(cart_total(&cart), sum.to_string());
    assert_eq!(cart_total(&cart), "55.00");
}

#[test]
fn test_scenario_cactus_twice() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());
    cart.add_item(&cactus());

    assert_eq!(cart.len(), 1);
    let line = &cart.items()[0];
    assert_eq!(line.name, "Cactus");
    assert_eq!(line.quantity, 2);
    assert_eq!(line_subtotal(line), "20.00");
    assert_eq!(cart_total(&cart), "20.00");
}

#[test]
fn test_scenario_cactus_and_ficus() {
    let mut cart = CartStore::new();
    cart.add_item(&cactus());
    cart.add_item(&ficus());

    assert_eq!(cart_total(&cart), "25.00");
}

#[test]
fn test_empty_cart_total() {
    assert_eq!(cart_total(&CartStore::new()), "0.00");
}
