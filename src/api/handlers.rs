//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::config::PayrollConfig;
use crate::error::EngineError;
use crate::models::{AuditTrace, AuditWarning, CalculationResult, Employee, PayPeriod};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Warning code raised when payroll is calculated for an employee who is not active.
pub const WARNING_EMPLOYEE_NOT_ACTIVE: &str = "EMPLOYEE_NOT_ACTIVE";

/// Body of the `/health` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering.
    pub status: &'static str,
    /// The package name.
    pub service: &'static str,
    /// The package version.
    pub version: &'static str,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the payroll breakdown with its
/// audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(request, state.config().config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                period = %result.period_label,
                gross_salary = %result.breakdown.gross_salary,
                net_salary = %result.breakdown.net_salary,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rates endpoint.
///
/// Returns the statutory rates, the ISSS cap and the Renta bracket table in use.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let config: PayrollConfig = state.config().config().clone();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(config),
    )
        .into_response()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Validates the request, runs the payroll pipeline and wraps the outcome.
fn perform_calculation(
    request: CalculationRequest,
    config: &PayrollConfig,
) -> Result<CalculationResult, EngineError> {
    let start_time = Instant::now();

    let input = request.payroll_input();
    let period: PayPeriod = request.period.into();
    let employee: Employee = request.employee.into();

    period.validate()?;
    let calculation = calculate_payroll(&input, config)?;

    let mut warnings = Vec::new();
    if !employee.is_active() {
        warnings.push(AuditWarning::new(
            WARNING_EMPLOYEE_NOT_ACTIVE,
            format!(
                "Employee {} has status '{}'",
                employee.full_name(),
                employee.status.as_str()
            ),
            "medium",
        ));
    }
    warnings.extend(calculation.warnings);

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rates_version: config.metadata().version.clone(),
        employee_id: employee.id,
        period,
        period_label: period.label(),
        breakdown: calculation.result.rounded(),
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
