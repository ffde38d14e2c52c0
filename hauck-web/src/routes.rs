//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use hauck_common::config::Config;
use hauck_core::{hauck_anderson_test, CalcResult, ComparisonInput, Report, ABOUT};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use crate::error::WebError;
use crate::form::{check_alpha, CalculatorForm, TestRequest};
use crate::middleware::trace_request;
use crate::templates::{FormPage, Templates};

/// Application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(config: Config) -> hauck_common::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            templates: Arc::new(Templates::new()?),
        })
    }

    fn default_comparisons(&self) -> u32 {
        self.config.calculator.default_comparisons
    }

    fn alpha(&self) -> f64 {
        self.config.calculator.significance_level
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.web.body_limit_bytes;
    let timeout = Duration::from_secs(state.config.web.request_timeout_secs);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // HTML form
        .route("/", get(index))
        .route("/calculate", post(calculate_form))
        .route("/about", get(about_page))
        // JSON API
        .route("/api/v1/test", post(calculate_json))
        .route("/api/v1/about", get(about_json))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(trace_request))
}

/// Run the calculator and build the report, logging the outcome.
fn run(input: &ComparisonInput, alpha: f64) -> CalcResult<Report> {
    let result = hauck_anderson_test(input)?;
    let report = Report::new(result, input.mode, alpha);

    tracing::info!(
        p1 = input.group1.proportion.value(),
        n1 = input.group1.sample_size.value(),
        p2 = input.group2.proportion.value(),
        n2 = input.group2.sample_size.value(),
        mode = %input.mode,
        comparisons = result.comparisons,
        z = result.z,
        adjusted_p_value = result.adjusted_p_value,
        significant = report.significant,
        "Calculation completed"
    );

    Ok(report)
}

// ============ Health Check ============

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "hauck-web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ============ HTML Form ============

async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let form = CalculatorForm::initial(state.default_comparisons());
    let html = state.templates.render_form(&FormPage::new(&form))?;
    Ok(Html(html))
}

async fn calculate_form(
    State(state): State<AppState>,
    Form(form): Form<CalculatorForm>,
) -> Result<Response, WebError> {
    let outcome = form
        .to_input(state.default_comparisons())
        .and_then(|input| run(&input, state.alpha()));

    match outcome {
        Ok(report) => {
            let html = state
                .templates
                .render_form(&FormPage::new(&form).with_report(&report))?;
            Ok(Html(html).into_response())
        }
        Err(err) => {
            tracing::warn!(error = %err, code = err.code(), "Calculation rejected");
            let html = state
                .templates
                .render_form(&FormPage::new(&form).with_error(&err))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

async fn about_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    Ok(Html(state.templates.render_about()?))
}

// ============ JSON API ============

async fn calculate_json(
    State(state): State<AppState>,
    payload: Result<Json<TestRequest>, JsonRejection>,
) -> Result<impl IntoResponse, WebError> {
    let Json(request) = payload.map_err(|e| WebError::InvalidRequest(e.body_text()))?;

    let alpha = match request.alpha {
        Some(alpha) => check_alpha(alpha)?,
        None => state.alpha(),
    };

    let report = request
        .to_input(state.default_comparisons())
        .and_then(|input| run(&input, alpha))
        .map_err(|err| {
            tracing::warn!(error = %err, code = err.code(), "Calculation rejected");
            err
        })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": report
    })))
}

async fn about_json() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "data": ABOUT
    }))
}
