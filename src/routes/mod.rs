pub(crate) mod admin;
pub(crate) mod dashboard;
pub mod health_checks;
pub(crate) mod new_user;
pub(crate) mod pages;
pub(crate) mod secure;

pub use health_checks::*;
