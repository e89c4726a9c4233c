use anyhow::Result;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{loans, prelude::*};
use crate::models::loan::{ExistingLoans, LoanApplication};

/// Repository for loan application records.
pub struct LoanRepository {
    conn: DatabaseConnection,
}

impl LoanRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a new application. `status` and `applied_at` are the only
    /// server-derived fields. A missing `loan_type` is left unset so the
    /// store's NOT NULL constraint rejects the row.
    pub async fn create(&self, input: &LoanApplication) -> Result<loans::Model> {
        let active = loans::ActiveModel {
            loan_type: input.loan_type.clone().map_or(NotSet, Set),
            full_name: Set(input.full_name.clone()),
            email: Set(input.email.clone()),
            phone: Set(input.phone.clone()),
            address: Set(input.address.clone()),
            loan_amount: Set(input.loan_amount),
            loan_duration: Set(input.loan_duration.clone()),
            status: Set("Pending".to_string()),
            applied_at: Set(Utc::now().to_rfc3339()),
            date_of_birth: Set(input.date_of_birth.clone()),
            employment_type: Set(input.employment_type.clone()),
            monthly_income: Set(input.monthly_income.clone()),
            loan_purpose: Set(input.loan_purpose.clone()),
            pan_card: Set(input.pan_card.clone()),
            credit_score: Set(input.credit_score.clone()),
            existing_loans: Set(input.existing_loans.as_ref().and_then(ExistingLoans::as_bool)),
            bank_name: Set(input.bank_name.clone()),
            account_number: Set(input.account_number.clone()),
            age: Set(input.age),
            contact_number: Set(input.contact_number.clone()),
            car_make: Set(input.car_make.clone()),
            car_model: Set(input.car_model.clone()),
            car_price: Set(input.car_price.clone()),
            loan_tenure: Set(input.loan_tenure.clone()),
            down_payment: Set(input.down_payment.clone()),
            business_name: Set(input.business_name.clone()),
            business_type: Set(input.business_type.clone()),
            year_established: Set(input.year_established.clone()),
            annual_revenue: Set(input.annual_revenue.clone()),
            business_address: Set(input.business_address.clone()),
            tax_id: Set(input.tax_id.clone()),
            institution: Set(input.institution.clone()),
            course: Set(input.course.clone()),
            course_duration: Set(input.course_duration.clone()),
            total_fees: Set(input.total_fees.clone()),
            parent_name: Set(input.parent_name.clone()),
            parent_income: Set(input.parent_income.clone()),
            academic_score: Set(input.academic_score.clone()),
            admission_status: Set(input.admission_status.clone()),
            jewel_type: Set(input.jewel_type.clone()),
            jewel_weight: Set(input.jewel_weight.clone()),
            jewel_purity: Set(input.jewel_purity.clone()),
            estimated_value: Set(input.estimated_value.clone()),
            employment_status: Set(input.employment_status.clone()),
            property_value: Set(input.property_value.clone()),
            property_location: Set(input.property_location.clone()),
            property_type: Set(input.property_type.clone()),
            ..Default::default()
        };

        Ok(active.insert(&self.conn).await?)
    }

    /// All applications, newest first.
    pub async fn list_all(&self) -> Result<Vec<loans::Model>> {
        let rows = Loans::find()
            .order_by_desc(loans::Column::AppliedAt)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    /// Applications whose `full_name` exactly equals the given string,
    /// newest first. This is a free-text match, not a foreign key.
    pub async fn list_by_full_name(&self, full_name: &str) -> Result<Vec<loans::Model>> {
        let rows = Loans::find()
            .filter(loans::Column::FullName.eq(full_name))
            .order_by_desc(loans::Column::AppliedAt)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    /// Set the status of one application and return the updated row.
    /// Returns `None` if no row with that id exists. The status string is
    /// stored as given; there is no enumeration to validate against.
    pub async fn update_status(&self, id: i32, status: &str) -> Result<Option<loans::Model>> {
        let Some(loan) = Loans::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: loans::ActiveModel = loan.into();
        active.status = Set(status.to_string());
        let updated = active.update(&self.conn).await?;

        Ok(Some(updated))
    }

    pub async fn count_by_full_name(&self, full_name: &str) -> Result<u64> {
        let count = Loans::find()
            .filter(loans::Column::FullName.eq(full_name))
            .count(&self.conn)
            .await?;

        Ok(count)
    }

    pub async fn count_by_full_name_and_status(
        &self,
        full_name: &str,
        status: &str,
    ) -> Result<u64> {
        let count = Loans::find()
            .filter(loans::Column::FullName.eq(full_name))
            .filter(loans::Column::Status.eq(status))
            .count(&self.conn)
            .await?;

        Ok(count)
    }
}
