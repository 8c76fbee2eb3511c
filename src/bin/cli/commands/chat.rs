use anyhow::Result;

use nova_lib::dashboard::{ChatDialog, Role};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, message: &str, format: &OutputFormat) -> Result<()> {
    let mut chat = ChatDialog::new();
    chat.open(app.now);
    chat.send(message, app.now)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chat.messages)?),
        OutputFormat::Plain => {
            for msg in &chat.messages {
                let who = match msg.role {
                    Role::User => "you",
                    Role::Assistant => "nova",
                };
                println!("{:>5}: {}", who, msg.content);
            }
        }
    }

    Ok(())
}
