//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating a monthly
//! payroll and inspecting the statutory rates in use.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{HealthResponse, WARNING_EMPLOYEE_NOT_ACTIVE, create_router};
pub use request::{CalculationRequest, EmployeeRequest, PeriodInputRequest, PeriodRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
