pub mod contact;
pub mod loan;
