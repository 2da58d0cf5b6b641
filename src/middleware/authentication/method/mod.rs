mod bearer;

pub use bearer::try_bearer;
