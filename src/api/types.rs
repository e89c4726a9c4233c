use serde::{Deserialize, Serialize};

use crate::db::User;
use crate::entities::loans;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserDto,
}

/// The stored user record as returned on login. The password hash never
/// leaves the repository layer.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            phone: user.phone,
            email: user.email,
        }
    }
}

/// The user-listing projection: {username, email, phone, address}.
/// `address` was never a user attribute, so it is always absent; the field
/// is kept to mirror the projection shape.
#[derive(Debug, Serialize)]
pub struct UserSummaryDto {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<User> for UserSummaryDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            phone: user.phone,
            address: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub loan: LoanDto,
}

#[derive(Debug, Serialize)]
pub struct LoanStatsResponse {
    pub applied: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// A stored loan application as returned by the list and update endpoints.
/// Unset optional fields are omitted from the payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    pub id: i32,
    pub loan_type: String,
    pub status: String,
    pub applied_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_loans: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_tenure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_established: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jewel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jewel_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jewel_purity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl From<loans::Model> for LoanDto {
    fn from(m: loans::Model) -> Self {
        Self {
            id: m.id,
            loan_type: m.loan_type,
            status: m.status,
            applied_at: m.applied_at,
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            loan_amount: m.loan_amount,
            loan_duration: m.loan_duration,
            date_of_birth: m.date_of_birth,
            employment_type: m.employment_type,
            monthly_income: m.monthly_income,
            loan_purpose: m.loan_purpose,
            pan_card: m.pan_card,
            credit_score: m.credit_score,
            existing_loans: m.existing_loans,
            bank_name: m.bank_name,
            account_number: m.account_number,
            age: m.age,
            contact_number: m.contact_number,
            car_make: m.car_make,
            car_model: m.car_model,
            car_price: m.car_price,
            loan_tenure: m.loan_tenure,
            down_payment: m.down_payment,
            business_name: m.business_name,
            business_type: m.business_type,
            year_established: m.year_established,
            annual_revenue: m.annual_revenue,
            business_address: m.business_address,
            tax_id: m.tax_id,
            institution: m.institution,
            course: m.course,
            course_duration: m.course_duration,
            total_fees: m.total_fees,
            parent_name: m.parent_name,
            parent_income: m.parent_income,
            academic_score: m.academic_score,
            admission_status: m.admission_status,
            jewel_type: m.jewel_type,
            jewel_weight: m.jewel_weight,
            jewel_purity: m.jewel_purity,
            estimated_value: m.estimated_value,
            employment_status: m.employment_status,
            property_value: m.property_value,
            property_location: m.property_location,
            property_type: m.property_type,
        }
    }
}
