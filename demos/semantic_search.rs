//! Semantic Search Demo
//!
//! Builds a corpus from a handful of reference texts and finds the one most
//! similar to a query, using asymmetric query/document embeddings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example semantic_search
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
    let retriever = Retriever::new("luminous-base", Arc::new(gateway));

    let dataset = [
        "Germany : Germany, officially the Federal Republic of Germany, is a country in Central Europe. The nation's capital and largest city is Berlin, and its financial centre is Frankfurt.",
        "Bristol : Bristol is a city, ceremonial county and unitary authority in England, situated on the River Avon. It is the most populous city in South West England.",
        "Heidelberg : Heidelberg is a university town in the German state of Baden-Wuerttemberg, situated on the river Neckar in south-west Germany.",
        "France : France, officially the French Republic, is a transcontinental country spanning Western Europe and overseas regions and territories. Its capital is Paris, the country's largest city.",
    ];

    println!("Embedding {} reference texts...", dataset.len());
    let corpus = retriever.build_corpus(&dataset).await?;
    println!("Corpus dimension: {:?}", corpus.dimension());

    let query = "Which city is the capital of France?";
    println!("\nQuery: {}", query);

    let hit = retriever.search(&corpus, query).await?;

    println!("\nBest match (score {:.4}, index {}):", hit.score, hit.index);
    println!("{}", hit.document.text);

    Ok(())
}
