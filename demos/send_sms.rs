use std::io;

use textmagic::{Credentials, MessageText, Msisdn, SendSms, SenderId, TextMagicClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("TEXTMAGIC_USERNAME")?;
    let password = required_env("TEXTMAGIC_PASSWORD")?;
    let to_raw = required_env("TEXTMAGIC_TO")?;
    let text = std::env::var("TEXTMAGIC_TEXT").unwrap_or_else(|_| "hello from textmagic".to_owned());

    let recipients = to_raw
        .split(',')
        .map(|phone| Msisdn::parse(None, phone))
        .collect::<Result<Vec<_>, _>>()?;
    let mut request = SendSms::new(MessageText::new(text)?, recipients);
    if let Ok(from) = std::env::var("TEXTMAGIC_FROM") {
        request = request.sender(SenderId::new(from)?);
    }

    let client = TextMagicClient::new(Credentials::new(username, password)?);
    match client.send(&request).await {
        Ok(response) => println!(
            "sent {:?} in {} part(s): {:?}",
            response.sent_text, response.parts_count, response.message_ids
        ),
        Err(err) => {
            eprintln!("sent before failure: {:?}", err.partial.message_ids);
            return Err(err.into_error().into());
        }
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
