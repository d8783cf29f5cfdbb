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
    let last_retrieved = std::env::var("TEXTMAGIC_LAST_RETRIEVED_ID")
        .ok()
        .and_then(|id| MessageId::parse(id.trim()))
        .unwrap_or(MessageId::new(0));

    let client = TextMagicClient::new(Credentials::new(username, password)?);
    let inbox = client.receive(last_retrieved).await?;

    for message in &inbox.messages {
        println!(
            "{} from {} at {}: {}",
            message.message_id, message.from, message.timestamp, message.text
        );
    }
    println!("unread: {}", inbox.unread);

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
