use pizza_shack::{config::Environment, startup};

use crate::util::test_config;

#[tokio::test]
/// Expect connection and migrations to succeed against an in-memory database
async fn connects_and_migrates() {
    let config = test_config(Environment::Development);

    let result = startup::connect_to_database(&config).await;

    assert!(result.is_ok());
}

#[tokio::test]
/// Expect an unusable database URL to surface as an error, not a panic
async fn unusable_url_is_an_error() {
    let mut config = test_config(Environment::Development);
    config.database_url = "foo://nowhere".to_string();

    let result = startup::connect_to_database(&config).await;

    assert!(result.is_err());
}
