pub use auth::*;
pub use auth_client::*;
pub use directory::*;
pub use guard::*;
pub use menu::*;
pub use password::*;
pub use session_store::*;
pub use storage::*;

mod auth;
mod auth_client;
mod directory;
mod guard;
mod menu;
mod password;
mod session_store;
mod storage;
