mod dashboard;
mod user;

pub use dashboard::Dashboard;
pub use user::Profile;
