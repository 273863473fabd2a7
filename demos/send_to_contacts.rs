use std::io;

use notify_sms::{ContactNumber, Credentials, MessageText, NotifySmsClient, SenderId, ToContacts};

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
    let sender_id = std::env::var("NOTIFY_SMS_SENDER_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_SMS_SENDER_ID environment variable is required",
        )
    })?;
    let contact = std::env::var("NOTIFY_SMS_TEST_CONTACT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_SMS_TEST_CONTACT environment variable is required",
        )
    })?;
    let message = std::env::var("NOTIFY_SMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the notify-sms demo.".to_owned());

    let client = NotifySmsClient::connect(Credentials::new(username, password)?).await?;

    let request = ToContacts::new(
        SenderId::new(sender_id)?,
        MessageText::new(message)?,
        vec![ContactNumber::new(contact)?],
    )?;
    let response = client.send_to_contacts(request).await?;
    println!(
        "success: {}, message: {:?}",
        response.success, response.message
    );

    Ok(())
}
