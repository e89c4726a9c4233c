pub use super::contacts::Entity as Contacts;
pub use super::loans::Entity as Loans;
pub use super::users::Entity as Users;
