// Demo entry point: loads settings from the default config path, aggregates
// a built-in user set, summarizes a sample series and fetches a user from
// the mock directory.

use dataprep::config::DEFAULT_CONFIG_PATH;
use dataprep::{
    calculate_statistics, load_config_or_default, AppError, AppSettings, MockUserDirectory,
    UserAggregator, UserDirectory, UserRecord,
};
use tracing_subscriber::EnvFilter;

fn sample_users() -> Vec<UserRecord> {
    let user = |id: u64, name: &str, email: &str, role: &str, status: &str| UserRecord {
        id: Some(id),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        role: Some(role.to_string()),
        status: Some(status.to_string()),
        ..Default::default()
    };

    vec![
        user(1, "Alice Johnson", "alice@company.com", "admin", "active"),
        user(2, "Bob Smith", "bob@company.com", "user", "active"),
        user(3, "Charlie Brown", "invalid-email", "user", "inactive"),
        user(4, "Diana Prince", "diana@company.com", "admin", "active"),
    ]
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::from_config(&load_config_or_default(DEFAULT_CONFIG_PATH));

    let aggregator = UserAggregator::new();
    let stats = aggregator.process(&sample_users());
    let stats_json = serde_json::to_string(&stats).map_err(|e| AppError::internal(e.to_string()))?;
    println!("Processing results: {}", stats_json);

    let test_numbers = [1.5, 2.7, 3.1, 4.8, 5.2, 6.9, 7.3, 8.1, 9.4, 10.6];
    println!("Statistics - {}", calculate_statistics(&test_numbers).summary());

    let client = MockUserDirectory::new("test_api_key_12345", settings.default_timeout_secs);
    match client.get_user(42).await? {
        Some(user) => println!("Fetched user: {:?}", user),
        None => println!("Fetched user: none"),
    }

    Ok(())
}
