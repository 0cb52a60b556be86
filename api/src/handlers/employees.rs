//! Employee handlers
//!
//! CRUD endpoints for employee records.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::entities::{Employee, EmployeeFilter, EmployeeId};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing employees
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEmployeesQuery {
    /// Case-insensitive substring match on the first name
    pub first_name_contains: Option<String>,
}

/// Employee representation returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        EmployeeResponse {
            id: e.id.0,
            first_name: e.first_name,
            last_name: e.last_name,
            social_security_number: e.social_security_number,
            address1: e.contact.address1,
            address2: e.contact.address2,
            city: e.contact.city,
            state: e.contact.state,
            zip_code: e.contact.zip_code,
            phone_number: e.contact.phone_number,
            email: e.contact.email,
            created_at: e.created_at.to_rfc3339(),
            updated_at: e.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// GET /employees
///
/// List all employees, optionally filtered with `FirstNameContains`.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let filter = query
        .first_name_contains
        .map(EmployeeFilter::first_name_contains)
        .unwrap_or_default();

    let employees = state.employee_service.list(&filter).await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state.employee_service.get(EmployeeId(id)).await?;

    Ok(Json(employee.into()))
}

/// POST /employees
///
/// Create an employee. Responds 201 with the new record and its location.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let employee = state.employee_service.create(request).await?;
    let location = format!("/employees/{}", employee.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EmployeeResponse::from(employee)),
    ))
}

/// PUT /employees/:id
///
/// Replace the address and contact details of an employee.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let Json(request) = payload?;
    let employee = state
        .employee_service
        .update(EmployeeId(id), request)
        .await?;

    Ok(Json(employee.into()))
}

/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.employee_service.delete(EmployeeId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
