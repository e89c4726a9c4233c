use sea_orm::entity::prelude::*;

/// A loan application. `loan_type` tags which of the optional field groups
/// (property, vehicle, business, education, jewelry, income) the caller
/// filled in; the schema does not enforce any pairing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub loan_type: String,

    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub loan_amount: Option<f64>,
    pub loan_duration: Option<String>,

    /// Open string set; "Pending" on insert, only ever changed by the
    /// status-update operation.
    pub status: String,

    /// RFC 3339, set at insert time. List endpoints order on this.
    pub applied_at: String,

    pub date_of_birth: Option<String>,
    pub employment_type: Option<String>,
    pub monthly_income: Option<String>,
    pub loan_purpose: Option<String>,
    pub pan_card: Option<String>,
    pub credit_score: Option<String>,
    pub existing_loans: Option<bool>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub age: Option<i32>,
    pub contact_number: Option<String>,

    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_price: Option<String>,
    pub loan_tenure: Option<String>,
    pub down_payment: Option<String>,

    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub year_established: Option<String>,
    pub annual_revenue: Option<String>,
    pub business_address: Option<String>,
    pub tax_id: Option<String>,

    pub institution: Option<String>,
    pub course: Option<String>,
    pub course_duration: Option<String>,
    pub total_fees: Option<String>,
    pub parent_name: Option<String>,
    pub parent_income: Option<String>,
    pub academic_score: Option<String>,
    pub admission_status: Option<String>,

    pub jewel_type: Option<String>,
    pub jewel_weight: Option<String>,
    pub jewel_purity: Option<String>,
    pub estimated_value: Option<String>,
    pub employment_status: Option<String>,

    pub property_value: Option<String>,
    pub property_location: Option<String>,
    pub property_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
