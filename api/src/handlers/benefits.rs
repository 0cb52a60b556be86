//! Benefit handlers
//!
//! Read-only access to the benefits an employee is enrolled in.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{BenefitType, EmployeeBenefit, EmployeeId};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenefitResponse {
    pub id: i32,
    pub employee_id: i32,
    pub benefit_type: BenefitType,
    pub description: Option<String>,
}

impl From<EmployeeBenefit> for BenefitResponse {
    fn from(b: EmployeeBenefit) -> Self {
        BenefitResponse {
            id: b.id,
            employee_id: b.employee_id.0,
            benefit_type: b.benefit_type,
            description: b.description,
        }
    }
}

/// GET /employees/:id/benefits
///
/// 404 when the employee does not exist, otherwise the (possibly empty) list.
pub async fn list_benefits(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BenefitResponse>>, AppError> {
    let benefits = state.employee_service.benefits(EmployeeId(id)).await?;

    Ok(Json(benefits.into_iter().map(Into::into).collect()))
}
