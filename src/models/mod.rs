pub use menu::*;
pub use role::*;
pub use session::*;
pub use user::*;

mod menu;
mod role;
mod session;
mod user;
