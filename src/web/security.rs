use actix_web::HttpRequest;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Login attempts allowed per client within `LOGIN_WINDOW`.
pub const LOGIN_ATTEMPTS: usize = 5;
pub const LOGIN_WINDOW: Duration = Duration::from_secs(300);

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Check if request should be allowed
    /// Returns true if allowed, false if rate limit exceeded
    pub fn check_rate_limit(
        &self,
        key: &str,
        max_requests: usize,
        window: Duration,
    ) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();

        entry.retain(|&time| {
            now.duration_since(time).unwrap_or(Duration::from_secs(0))
                < window
        });

        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);

        // Drop idle clients so the map cannot grow without bound
        requests.retain(|_, times| !times.is_empty());

        true
    }

    pub fn allow_login(&self, req: &HttpRequest) -> bool {
        self.check_rate_limit(
            &format!("login:{}", client_ip(req)),
            LOGIN_ATTEMPTS,
            LOGIN_WINDOW,
        )
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
