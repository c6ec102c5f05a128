pub mod login;
pub mod validation;
