//! Interactive chat against the SimSimi relay service
//!
//! Reads lines from stdin and prints each reply. Set `SIMSIMI_LOCALE` to pick
//! the reply language, and `RUST_LOG=simsimi_http=debug` to see the requests.
//! Endpoint overrides are read from `SIMSIMI_UUID_URL` / `SIMSIMI_RELAY_URL`.

use simsimi::prelude::*;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let locale = std::env::var("SIMSIMI_LOCALE").unwrap_or_else(|_| locale::ENGLISH.to_string());
    let service = SimSimiBuilder::from_config(SimSimiConfig::from_env()?).build()?;

    let mut conversation = Conversation::start(service).await?.with_locale(locale);
    println!(
        "Session {} ({}). Empty line to quit.",
        conversation.identifier(),
        conversation.locale()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        match conversation.chat(line.trim()).await {
            Ok(reply) => println!("{reply}"),
            Err(Error::UnexpectedResponse(message)) => {
                eprintln!("service rejected the request: {message}");
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    println!("{} replies", conversation.turns());
    Ok(())
}
