//! Payroll Handlers
//!
//! `netSalary` is always derived by the repository; no handler accepts it
//! as input.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::{CurrentUser, Role};
use crate::core::ServerState;
use crate::db::models::{PayrollCreate, PayrollQuery, PayrollRecord, PayrollUpdate};
use crate::db::repository::{AccountRepository, PayrollRepository};
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, require_field, validate_optional_text,
    validate_required_text,
};

/// GET /payroll?month&search&department
///
/// Employees see their own records only; hr and managers see the filtered
/// aggregate.
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<PayrollQuery>,
) -> Result<Json<Vec<PayrollRecord>>, AppError> {
    let repo = PayrollRepository::new(state.get_db());

    let records = match user.role {
        Role::Employee => {
            let me = user.id.parse().map_err(|_| AppError::invalid_token())?;
            repo.find_by_employee(me).await?
        }
        Role::Manager | Role::Hr => repo.find_filtered(&query).await?,
    };

    Ok(Json(records))
}

/// POST /payroll — HR creates a record for an employee/month
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<PayrollCreate>,
) -> Result<(StatusCode, Json<PayrollRecord>), AppError> {
    user.require_role(&[Role::Hr])?;

    let employee_id = require_field(payload.employee_id, "employeeId")?;
    let month = require_field(payload.month, "month")?;
    let base_salary = require_field(payload.base_salary, "baseSalary")?;
    validate_required_text(&month, "month", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.bonus_description, "bonusDescription", MAX_NOTE_LEN)?;
    validate_optional_text(
        &payload.deduction_description,
        "deductionDescription",
        MAX_NOTE_LEN,
    )?;

    let account = AccountRepository::new(state.get_db())
        .find_by_id(&employee_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", employee_id)))?;
    if account.role != Role::Employee {
        return Err(AppError::validation(format!(
            "{} is not an employee account",
            employee_id
        )));
    }
    let employee = account
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Account record has no id"))?;

    let repo = PayrollRepository::new(state.get_db());
    let record = repo
        .create(
            employee,
            account.name,
            account.department,
            month,
            base_salary,
            payload.bonus.unwrap_or(Decimal::ZERO),
            payload.bonus_description,
            payload.deduction.unwrap_or(Decimal::ZERO),
            payload.deduction_description,
        )
        .await?;

    state.activity.log(
        &user,
        ActivityAction::Create,
        ActivityModule::Payroll,
        format!("created payroll record for {}", employee_id),
        None,
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /payroll — HR updates one record's adjustable fields
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<PayrollUpdate>,
) -> Result<Json<PayrollRecord>, AppError> {
    user.require_role(&[Role::Hr])?;

    let id = require_field(payload.id.clone(), "id")?;
    validate_optional_text(&payload.bonus_description, "bonusDescription", MAX_NOTE_LEN)?;
    validate_optional_text(
        &payload.deduction_description,
        "deductionDescription",
        MAX_NOTE_LEN,
    )?;

    let repo = PayrollRepository::new(state.get_db());
    let record = repo.update(&id, payload).await?;

    state.activity.log(
        &user,
        ActivityAction::Update,
        ActivityModule::Payroll,
        format!("updated payroll record {}", id),
        None,
    );

    Ok(Json(record))
}
