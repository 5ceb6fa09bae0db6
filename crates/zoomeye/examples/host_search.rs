//! Host search demo with pagination.
//!
//! Run with: cargo run -p zoomeye --example host_search
//!
//! Set ZOOMEYE_USERNAME and ZOOMEYE_PASSWORD before running.

use zoomeye::{Filter, Result, ZoomEyeClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials come from the environment
    let username = std::env::var("ZOOMEYE_USERNAME")
        .expect("ZOOMEYE_USERNAME environment variable is required");
    let password = std::env::var("ZOOMEYE_PASSWORD")
        .expect("ZOOMEYE_PASSWORD environment variable is required");

    let client = ZoomEyeClient::with_password(username, password)?;
    client.login().await?;

    println!("=== Resources ===");
    let info = client.account().resources_info().await?;
    println!("{info:#}");
    println!();

    println!("=== nginx in the US ===");
    let page = client
        .search()
        .host("nginx")
        .filter(Filter::Country, "US")
        .facets(["app", "os"])
        .send()
        .await?;
    println!("Total: {:?}", page.total());
    if let Some(facets) = page.facets() {
        for (name, values) in facets {
            println!("  {name}: {values}");
        }
    }
    println!();

    let next = page.next_page().await?;
    println!("Page {} has {} matches", next.page_number(), next.len());
    for record in next.matches().iter().take(5) {
        println!("  {}", record["ip"]);
    }

    Ok(())
}
