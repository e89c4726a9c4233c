use serde::Deserialize;

/// Intake forms send `existingLoans` as either a boolean or a "Yes"/"No"
/// string depending on the form variant. Normalized to a boolean at this
/// boundary; unrecognized strings are treated as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExistingLoans {
    Flag(bool),
    Label(String),
}

impl ExistingLoans {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Label(s) if s.eq_ignore_ascii_case("yes") => Some(true),
            Self::Label(s) if s.eq_ignore_ascii_case("no") => Some(false),
            Self::Label(_) => None,
        }
    }
}

/// A loan application as submitted over the wire. Every field is optional:
/// the caller supplies whatever subset its form variant collects, and the
/// only required column (`loan_type`) is enforced by the store, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanApplication {
    pub loan_type: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub loan_amount: Option<f64>,
    pub loan_duration: Option<String>,

    pub date_of_birth: Option<String>,
    pub employment_type: Option<String>,
    pub monthly_income: Option<String>,
    pub loan_purpose: Option<String>,
    pub pan_card: Option<String>,
    pub credit_score: Option<String>,
    pub existing_loans: Option<ExistingLoans>,
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
