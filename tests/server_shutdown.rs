mod common;

use amarshop::config::ServerConfig;
use amarshop::server::shutdown::ShutdownManager;
use amarshop::server::{AppState, StorefrontServer};
use common::{free_port, instant_checkout, memory_store, wait_for_server};
use std::time::Duration;

#[tokio::test]
async fn test_shutdown_manager_initialization() {
    let manager = ShutdownManager::new();
    assert!(!manager.is_shutting_down());
}

#[tokio::test]
async fn test_signal_before_wait_returns_immediately() {
    let manager = ShutdownManager::new();
    manager.signal_shutdown();
    assert!(manager.is_shutting_down());

    let result = tokio::time::timeout(Duration::from_secs(1), manager.wait_for_shutdown()).await;
    assert!(matches!(result, Ok(Ok(()))));
}

#[tokio::test]
async fn test_server_stops_on_signal() {
    let (store, _) = memory_store();
    let checkout = instant_checkout(&store);
    let mut server = StorefrontServer::new(AppState::new(store, checkout));

    let config = ServerConfig {
        bind_addr: format!("127.0.0.1:{}", free_port()),
    };
    let addr = server.try_bind(&config).await.expect("Failed to bind");
    let shutdown = server.shutdown_handle();

    let handle = tokio::spawn(server.run());
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);

    shutdown.signal_shutdown();
    let result = tokio::time::timeout(Duration::from_secs(5), handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}

#[tokio::test]
async fn test_busy_port_falls_back_to_next() {
    let port = free_port();
    let _occupied = std::net::TcpListener::bind(("127.0.0.1", port)).unwrap();

    let (store, _) = memory_store();
    let checkout = instant_checkout(&store);
    let mut server = StorefrontServer::new(AppState::new(store, checkout));
    let config = ServerConfig {
        bind_addr: format!("127.0.0.1:{}", port),
    };

    let addr = server.try_bind(&config).await.expect("Failed to bind");
    assert_ne!(addr.port(), port);
    assert!(addr.port() > port);
}
