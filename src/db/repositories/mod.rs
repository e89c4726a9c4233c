pub mod contact;
pub mod loan;
pub mod user;
