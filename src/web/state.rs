use std::sync::Arc;

use hotelpress::services::AuthClient;

use crate::web::cookies::CookieSettings;
use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub auth_client: Arc<dyn AuthClient>,
    pub rate_limiter: Arc<RateLimiter>,
    pub cookies: CookieSettings,
}

impl AppState {
    pub fn new(auth_client: Arc<dyn AuthClient>, cookies: CookieSettings) -> Self {
        Self {
            auth_client,
            rate_limiter: Arc::new(RateLimiter::new()),
            cookies,
        }
    }
}
