use std::io;

use textmagic::{Credentials, TextMagicClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("TEXTMAGIC_USERNAME")?;
    let password = required_env("TEXTMAGIC_PASSWORD")?;

    let client = TextMagicClient::new(Credentials::new(username, password)?);
    let balance = client.account_balance().await?;

    println!("balance: {balance}");

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
