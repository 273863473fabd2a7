use std::io;

use notify_sms::{Credentials, NotifySmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("NOTIFY_SMS_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_SMS_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("NOTIFY_SMS_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_SMS_PASSWORD environment variable is required",
        )
    })?;

    let client = NotifySmsClient::connect(Credentials::new(username, password)?).await?;

    let response = client.get_senders().await?;
    for sender in &response.senders {
        println!(
            "{} {} active={} status={:?}",
            sender.id, sender.title, sender.active, sender.status
        );
    }

    Ok(())
}
