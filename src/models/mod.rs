mod identity;
mod membership;
mod organization;
mod user;

pub use identity::*;
pub use membership::*;
pub use organization::*;
pub use user::*;
