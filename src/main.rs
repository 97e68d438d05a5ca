use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use car_price_predictor::{
    config::PredictorConfig,
    history::{self, HistoryEntry},
    predict::{Estimate, Predictor},
    types::RawInput,
    PredictorError,
};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    predictor: Arc<Predictor>,
}

// ---------- Handlers ----------

async fn estimate(
    State(state): State<AppState>,
    Json(raw): Json<RawInput>,
) -> Result<Json<Estimate>, (StatusCode, Json<serde_json::Value>)> {
    match state.predictor.estimate(&raw) {
        Ok(est) => {
            tracing::info!(
                "estimated {} {} ({}, {} km): {:.0} (confidence {:.0}%)",
                est.input.brand.label(),
                est.input.body_type.label(),
                est.input.year,
                est.input.mileage,
                est.price,
                est.confidence
            );
            Ok(Json(est))
        }
        Err(e) => {
            let status = match &e {
                PredictorError::OutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                PredictorError::SchemaUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::warn!("estimate failed: {}", e);
            Err((status, Json(json!({ "error": e.to_string() }))))
        }
    }
}

async fn prediction_history() -> Json<Vec<HistoryEntry>> {
    Json(history::sample_history())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = PredictorConfig::from_env();
    let predictor = match Predictor::load(&cfg) {
        Ok(p) => p,
        Err(e) => {
            // Without both artifacts there is nothing to serve.
            tracing::error!("prediction disabled: {}", e);
            return Err(e.into());
        }
    };
    predictor.warmup()?;
    tracing::info!("warmup forward ok");
    tracing::info!(
        "loaded model; feature_columns[{}]: {:?}",
        predictor.schema().len(),
        predictor.schema().columns()
    );

    let state = AppState {
        predictor: Arc::new(predictor),
    };

    let app = Router::new()
        .route("/predict", post(estimate))
        .route("/history", get(prediction_history))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
