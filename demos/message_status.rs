use std::io;

use textmagic::{Credentials, MessageId, TextMagicClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("TEXTMAGIC_USERNAME")?;
    let password = required_env("TEXTMAGIC_PASSWORD")?;
    let ids_raw = required_env("TEXTMAGIC_MESSAGE_IDS")?;

    let ids = ids_raw
        .split(',')
        .map(|id| {
            MessageId::parse(id.trim()).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("message id {id:?} is not a number"),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let client = TextMagicClient::new(Credentials::new(username, password)?);
    let statuses = client.message_status(&ids).await?;

    for (id, status) in statuses {
        println!(
            "{id}: [{}] {} ({})",
            status.status.as_str(),
            status.status,
            status.status.stage()
        );
    }

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
