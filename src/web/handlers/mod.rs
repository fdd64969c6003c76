pub mod admin;
pub mod api;
pub mod auth;

use actix_web::web;

/// Configure the session and admin routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    admin::configure(cfg);
}
