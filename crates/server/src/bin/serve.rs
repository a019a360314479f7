use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    server::telemetry::init_subscriber();

    server::config::load_config();
    let flags = server::config::feature_flags();

    if flags.telemetry {
        server::telemetry::init_telemetry();
    }
    server::health::record_start_time();

    let mut router = server::openapi::api_router();

    if flags.telemetry {
        router = router.layer(server::telemetry::OtelTraceLayer);
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
        .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
            tower_http::request_id::MakeRequestUuid,
        ));

    let addr = server::config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, docs = flags.docs, "Court progression service listening");

    axum::serve(listener, router).await
}
