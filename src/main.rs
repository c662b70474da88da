use anyhow::Context;
use six_cities::api::HttpOfferSource;
use six_cities::config::Config;
use six_cities::logging;
use six_cities::state::CatalogView;
use six_cities::Session;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to read configuration")?;
    logging::init(&config.log_level, config.log_format)?;

    info!("🏠 Six Cities - offer catalog");
    info!(api = %config.api.base_url, city = %config.selection.city, sort = %config.selection.sort);

    let source = HttpOfferSource::new(&config.api)?;
    let session = Session::with_selection(source, config.selection.clone());

    session
        .load_offers()
        .await
        .context("Failed to load offers")?;

    let json = session.view(|store| {
        let view = CatalogView::from_store(store);

        println!("{}", view.summary);
        println!();
        for (i, offer) in view.offers.iter().enumerate() {
            let premium = if offer.is_premium { " [Premium]" } else { "" };
            println!("{}. {}{} (€{} / night)", i + 1, offer.title, premium, offer.price);
            println!("   {} · rating {:.1}", offer.kind, offer.rating);
            println!("   ID: {}", offer.id);
            println!();
        }

        serde_json::to_string_pretty(&view)
    })?;
    tokio::fs::write("catalog_view.json", json).await?;
    info!("💾 Saved catalog view to catalog_view.json");

    Ok(())
}
