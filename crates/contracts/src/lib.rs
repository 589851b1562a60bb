pub mod checkout;
pub mod domain;
