//! Scripted demo: a customer shops, orders flow through the pipeline, and
//! the deliveries are watched to completion.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use std::time::Duration;

use mallsim::model::ItemBasket;
use mallsim::pipeline::{OrderPipeline, PipelineConfig, PipelineError};
use mallsim::storefront::Storefront;
use mallsim::telemetry::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    setup_tracing();
    info!("starting mallsim demo");

    // Deliveries run fast so the demo finishes in seconds.
    let pipeline = OrderPipeline::start(PipelineConfig {
        phase_delay: Duration::from_millis(500),
    });
    let mut store = Storefront::new(pipeline.client.clone());

    for item in store.catalog().items() {
        info!(%item, "for sale");
    }

    // A straightforward purchase.
    place_order(&mut store, ItemBasket::from([("snack".into(), 2)])).await;

    // Shopping via the cart.
    store.add_to_cart(ItemBasket::from([("coffee".into(), 1)]));
    store.add_to_cart(ItemBasket::from([("coffee".into(), 1), ("meal".into(), 1)]));
    match store.checkout_cart().await {
        Ok(total) => info!(total, "cart checked out"),
        Err(e) => error!(error = %e, "cart checkout refused"),
    }

    // This one costs 1400 points and is refused.
    place_order(&mut store, ItemBasket::from([("cellphone".into(), 2)])).await;

    for (index, slot) in store.orders().iter().enumerate() {
        info!(slot = index, status = %slot.status, items = ?slot.items, "order slot");
    }

    // Watch the deliveries land.
    while store.order_count() > 0 {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    info!(points = store.points(), "all deliveries complete");

    drop(store);
    pipeline.shutdown().await?;
    info!("bye");
    Ok(())
}

async fn place_order(store: &mut Storefront, basket: ItemBasket) {
    match store.buy_now(basket).await {
        Ok(total) => info!(total, points = store.points(), "order placed"),
        Err(e) => error!(error = %e, "purchase refused"),
    }
}
