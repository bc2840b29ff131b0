use crate::application_ports::Locator;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

pub mod response;
pub mod stream_channel;

pub fn create_router<L: Locator + Send + Sync + Clone + 'static>() -> Router<L> {
    Router::new()
        .route(
            "/members/{member_id}/stream-channel",
            post(stream_channel::create_handler::<L>)
                .put(stream_channel::update_handler::<L>)
                .delete(stream_channel::delete_handler::<L>),
        )
        .route(
            "/members/{member_id}/stream-channel/clear",
            post(stream_channel::clear_handler::<L>),
        )
}

#[instrument(level = "info", skip(locator))]
pub async fn run_api<L: Locator + Send + Sync + Clone + 'static>(
    locator: L,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let router: Router<()> = create_router::<L>()
        .layer(TraceLayer::new_for_http())
        .with_state(locator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!(port, "API listening");

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
