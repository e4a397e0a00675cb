//! Smalltalk Demo
//!
//! Single-turn conversational responses from a hosted Luminous model.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example smalltalk
//! ```
//!
//! # Requirements
//!
//! - `AA_TOKEN` must be set (directly or via a `.env` file)

use semblance::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let gateway = LuminousGateway::new();
    let bot = Smalltalk::new("luminous-extended", Arc::new(gateway));

    for query in ["Hello", "What do you like to do on weekends?"] {
        println!("User: {}", query);
        let response = bot.respond(query).await?;
        println!("Bot:{}\n", response);
    }

    Ok(())
}
