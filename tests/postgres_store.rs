// Runs against a live database: DATABASE_URL=postgres://... cargo test -- --ignored
use components_backend::{
    database,
    models::product::NewProduct,
    store::{PgProductStore, ProductStore, StoreError},
};
use uuid::Uuid;

async fn store() -> PgProductStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = database::create_pool(&url)
        .await
        .expect("invalid DATABASE_URL");
    PgProductStore::new(pool)
}

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: 0.5,
        product_type: "passive".to_string(),
        manufacturer: None,
    }
}

#[tokio::test]
#[ignore]
async fn insert_update_delete_lifecycle() {
    let store = store().await;
    let name = format!("Resistor {}", Uuid::new_v4());

    let created = store.insert(new_product(&name)).await.unwrap();
    let id = created.id.to_string();
    assert_eq!(created.name, name);
    assert!(store.list().await.unwrap().iter().any(|p| p.id == created.id));

    let updated = store.update_price(&id, 0.57).await.unwrap().unwrap();
    assert_eq!(updated.price, 0.57);
    assert_eq!(updated.name, name);
    assert_eq!(updated.created_at, created.created_at);

    let removed = store.delete(&id).await.unwrap().unwrap();
    assert_eq!(removed.id, created.id);
    assert!(store.find(&id).await.unwrap().is_none());
    assert!(store.delete(&id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn unknown_uuid_matches_nothing() {
    let store = store().await;
    let id = Uuid::new_v4().to_string();

    assert!(store.find(&id).await.unwrap().is_none());
    assert!(store.update_price(&id, 1.0).await.unwrap().is_none());
    assert!(store.delete(&id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn malformed_id_is_a_database_error() {
    let store = store().await;

    assert!(matches!(
        store.find("not-an-id").await,
        Err(StoreError::Database(_))
    ));
    assert!(matches!(
        store.update_price("not-an-id", 1.0).await,
        Err(StoreError::Database(_))
    ));
    assert!(matches!(
        store.delete("not-an-id").await,
        Err(StoreError::Database(_))
    ));
}

#[tokio::test]
#[ignore]
async fn blank_fields_violate_check_constraint() {
    let store = store().await;

    let result = store.insert(new_product("   ")).await;
    assert!(matches!(result, Err(StoreError::Rejected(_))));

    let mut product = new_product("Capacitor");
    product.product_type = String::new();
    let result = store.insert(product).await;
    assert!(matches!(result, Err(StoreError::Rejected(_))));
}
