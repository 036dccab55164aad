//! Hydration dump tool.
//!
//! Fetches and normalizes section content exactly the way the site does,
//! then prints the result as JSON. Useful for checking what the page will
//! actually render against a given backend — point it at a dead URL to see
//! the pure default catalog.
//!
//! Usage:
//!   # All sections from the production API
//!   cargo run -p hibiscus-cli
//!
//!   # One section from a local backend
//!   cargo run -p hibiscus-cli -- --base-url http://localhost:8080/api hero

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use hibiscus_content::{DefaultCatalog, Section};
use hibiscus_hydrate::{ContentGateway, Hydrator};

/// Dump normalized landing-site content.
#[derive(Parser, Debug)]
#[command(name = "hibiscus")]
#[command(about = "Hydrate landing site sections and dump the normalized content")]
struct Args {
    /// Admin API base URL
    #[arg(long, default_value = hibiscus_hydrate::constants::DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Section to dump (hero, about, services, contact); all when omitted
    section: Option<Section>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let hydrator = Hydrator::new(
        ContentGateway::with_base_url(&args.base_url),
        Arc::new(DefaultCatalog::default()),
    );

    let output = match args.section {
        Some(Section::Hero) => json!({"hero": hydrator.hero().await}),
        Some(Section::About) => json!({"about": hydrator.about().await}),
        Some(Section::Services) => json!({"services": hydrator.services().await}),
        Some(Section::Contact) => json!({"contact": hydrator.contact().await}),
        None => {
            // Sections hydrate independently; fetch them all at once.
            let (hero, about, services, contact) = tokio::join!(
                hydrator.hero(),
                hydrator.about(),
                hydrator.services(),
                hydrator.contact(),
            );
            json!({
                "hero": hero,
                "about": about,
                "services": services,
                "contact": contact,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
