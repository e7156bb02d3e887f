//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use amarshop::checkout::Checkout;
use amarshop::config::CheckoutConfig;
use amarshop::domain::{Category, Product};
use amarshop::server::{AppState, StorefrontServer};
use amarshop::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use amarshop::store::{ManualClock, Store, StoreState};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

// -- Store helpers ------------------------------------------------------------

/// Seeded store over in-memory storage with a deterministic clock.
pub fn memory_store() -> (Store, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = Store::open_with_clock(
        storage.clone(),
        Arc::new(ManualClock::starting_at(1_700_000_000_000)),
    )
    .expect("Failed to open store");
    (store, storage)
}

/// Store over a fresh temp directory. Keep the `TempDir` alive for the test.
pub fn file_store() -> (Store, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = reopen_file_store(&dir);
    (store, dir)
}

/// Opens another store over the same directory, as a restarted process would.
pub fn reopen_file_store(dir: &TempDir) -> Store {
    let storage = Arc::new(FileStorage::new(dir.path()));
    Store::open_with_clock(storage, Arc::new(ManualClock::starting_at(1_700_000_000_000)))
        .expect("Failed to open store")
}

/// Store whose catalog is exactly `products`.
pub fn store_with_products(products: Vec<Product>) -> Store {
    let state = StoreState {
        products,
        ..StoreState::empty()
    };
    Store::from_state(
        state,
        Arc::new(MemoryStorage::new()),
        Arc::new(ManualClock::starting_at(1)),
    )
    .expect("Failed to open store")
}

/// Checkout with no artificial payment delay.
pub fn instant_checkout(store: &Store) -> Checkout {
    let config = CheckoutConfig {
        payment_delay_ms: 0,
        ..CheckoutConfig::default()
    };
    Checkout::new(store.clone(), &config)
}

/// Minimal product for catalog tests.
pub fn product(id: &str, name: &str, price: u64, category: Category) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        original_price: None,
        category,
        image: format!("https://img.example/{}.jpg", id),
        description: String::new(),
        stock: 5,
        rating: 4.0,
        reviews: 0,
        is_new: None,
    }
}

// -- Server helpers -----------------------------------------------------------

/// Binds a storefront on an ephemeral port and runs it in the background.
/// Returns the base URL and the store it serves.
pub async fn spawn_storefront() -> (String, Store) {
    let (store, _storage) = memory_store();
    let checkout = instant_checkout(&store);
    let mut server = StorefrontServer::new(AppState::new(store.clone(), checkout));

    let config = amarshop::config::ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
    };
    let addr = server.try_bind(&config).await.expect("Failed to bind");
    tokio::spawn(async move {
        let _ = server.run().await;
    });
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);

    (format!("http://{}", addr), store)
}
