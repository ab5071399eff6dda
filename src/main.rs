use axum::{extract::Extension, routing::get, Router};
use parking_lot::RwLock;
use product_tracker::product::handlers::{
    handle_create_product, handle_delete_product, handle_get_product, handle_hello,
    handle_list_products, handle_update_product,
};
use product_tracker::store::records::ProductStore;
use product_tracker::store::seed;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3001".parse()?;
    let mut db_path = PathBuf::from("db.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--db" => {
                db_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Seed the store (one-time, synchronous; failure here is fatal):
    let records = seed::load_records(&db_path)?;
    tracing::info!("Seeded {} records from {}", records.len(), db_path.display());
    let store = Arc::new(RwLock::new(ProductStore::from_records(records)));

    // 2. HTTP Router:
    let product_api = Router::new()
        .route("/", get(handle_list_products).post(handle_create_product))
        .route(
            "/:product_id",
            get(handle_get_product)
                .put(handle_update_product)
                .delete(handle_delete_product),
        );

    let app = Router::new()
        .nest("/api/product", product_api)
        .route("/api/hello", get(handle_hello))
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
