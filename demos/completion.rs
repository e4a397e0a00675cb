//! Completion Demo
//!
//! Completes a short text prompt with a hosted Luminous model.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example completion
//! ```
//!
//! # Requirements
//!
//! - `AA_TOKEN` must be set (directly or via a `.env` file)

use semblance::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let gateway = LuminousGateway::new();

    let prompt =
        "Luminous are a family of Large Language Models. Luminous Models are capable of";

    let config = CompletionConfig {
        maximum_tokens: 32,
        temperature: 0.2,
        stop_sequences: vec!["\n".to_string()],
    };

    println!("Prompt: {}", prompt);
    let completion = gateway.complete("luminous-extended", prompt, &config).await?;

    println!("Completion:{}", completion);

    Ok(())
}
