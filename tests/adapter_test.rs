use inventory_actor::adapter::{
    AddProductForm, AdjustQuantityForm, Redirect, SearchForm, SetPriceForm, Status, DELETED, NOT_FOUND,
};
use inventory_actor::config::InventoryConfig;
use inventory_actor::lifecycle::InventorySystem;
use tempfile::tempdir;

fn add_form(code: &str, category: &str, name: &str, quantity: &str, price: &str) -> AddProductForm {
    AddProductForm {
        code: code.into(),
        category: category.into(),
        name: name.into(),
        quantity: quantity.into(),
        price: price.into(),
    }
}

/// The request adapter driven against a real actor and file.
#[tokio::test]
async fn test_adapter_round_trip() {
    let dir = tempdir().unwrap();
    let system = InventorySystem::start(&InventoryConfig::new(dir.path().join("inventory.csv")));
    let adapter = system.adapter();

    let redirect = adapter
        .add(add_form("A1", "Tools", "Widget", "5", "12,50"))
        .await
        .unwrap();
    assert_eq!(redirect, Redirect::to_index(None));
    adapter
        .add(add_form("B2", "Garden", "Hose", "1", "3"))
        .await
        .unwrap();

    let listing = adapter.index().await.unwrap();
    assert_eq!(listing.products.len(), 2);
    assert_eq!(listing.products[0].code, "A1");
    assert_eq!(listing.products[0].price, 12.5);

    let found = adapter
        .search(SearchForm { criterion: " A1 ".into() })
        .await
        .unwrap();
    assert_eq!(found.products.len(), 1);
    assert_eq!(found.products[0].name, "Widget");

    let response = adapter
        .adjust_quantity(AdjustQuantityForm { code: "A1".into(), delta: "-6".into() })
        .await;
    assert_eq!(response.status, Status::Rejected);
    assert_eq!(response.message, "Insufficient stock: requested 6, available 5");

    let response = adapter
        .set_price(SetPriceForm { code: "Z9".into(), price: "4".into() })
        .await;
    assert_eq!(response.status, Status::NotFound);

    let response = adapter
        .set_price(SetPriceForm { code: "B2".into(), price: "4,25".into() })
        .await;
    assert!(response.success);

    assert_eq!(adapter.delete("B2").await.unwrap().message.as_deref(), Some(DELETED));
    assert_eq!(adapter.delete("B2").await.unwrap().message.as_deref(), Some(NOT_FOUND));

    drop(adapter);
    let repository = system.shutdown().await.unwrap();
    assert_eq!(repository.len(), 1);
}
