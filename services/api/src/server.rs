use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAlertPublisher, InMemoryCaseRepository, UnconfiguredExtractor,
};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use medbridge::config::AppConfig;
use medbridge::error::AppError;
use medbridge::telemetry;
use medbridge::workflows::licensure::{LicensureCaseService, MappingEngine};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCaseRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = Arc::new(LicensureCaseService::new(
        repository,
        alerts,
        Arc::new(UnconfiguredExtractor),
        MappingEngine::standard(),
    ));

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "licensure and matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
