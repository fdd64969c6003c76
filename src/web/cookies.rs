use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponseBuilder};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::collections::BTreeMap;

use hotelpress::config::MAX_REMEMBER_ME_DAYS;
use hotelpress::models::{ACCESS_TOKEN_KEY, PersistenceScope, USER_KEY};
use hotelpress::services::{ScopedSessionStore, Storage};

/// Session store whose two scopes live in the browser's cookie jar.
pub type CookieSessionStore = ScopedSessionStore<CookieStorage>;

/// Largest `Set-Cookie` line browsers are required to keep.
pub const MAX_COOKIE_BYTES: usize = 4096;

#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
    pub remember_me_days: i64,
}

/// One persistence scope mapped onto cookies.
///
/// SESSION scope cookies carry no `Max-Age` and die with the browser session;
/// DEVICE scope cookies persist for `remember_me_days`. Values are URL-safe base64
/// so JSON survives the cookie grammar.
#[derive(Debug, Clone)]
pub struct CookieStorage {
    scope: PersistenceScope,
    settings: CookieSettings,
    values: BTreeMap<String, String>,
    pending: BTreeMap<String, Option<String>>,
}

impl CookieStorage {
    pub fn empty(scope: PersistenceScope, settings: CookieSettings) -> Self {
        Self {
            scope,
            settings,
            values: BTreeMap::new(),
            pending: BTreeMap::new(),
        }
    }

    pub fn from_request(
        req: &HttpRequest,
        scope: PersistenceScope,
        settings: CookieSettings,
    ) -> Self {
        let mut storage = Self::empty(scope, settings);

        for key in [ACCESS_TOKEN_KEY, USER_KEY] {
            let Some(cookie) = req.cookie(&cookie_name(scope, key)) else {
                continue;
            };
            match decode_value(cookie.value()) {
                Some(value) => {
                    storage.values.insert(key.to_string(), value);
                }
                None => log::warn!("Ignoring undecodable {} cookie", cookie.name()),
            }
        }

        storage
    }

    /// Adds a `Set-Cookie` for every key written or removed since loading.
    pub fn apply(&self, resp: &mut HttpResponseBuilder) {
        for (key, value) in &self.pending {
            resp.cookie(self.build_cookie(key, value.as_deref()));
        }
    }

    /// Whether every pending cookie is small enough for the browser to keep.
    pub fn fits(&self) -> bool {
        self.pending.iter().all(|(key, value)| {
            let line = self.build_cookie(key, value.as_deref()).to_string();
            if line.len() > MAX_COOKIE_BYTES {
                log::warn!(
                    "{} cookie is {} bytes, over the {} byte limit",
                    cookie_name(self.scope, key),
                    line.len(),
                    MAX_COOKIE_BYTES
                );
                return false;
            }
            true
        })
    }

    fn build_cookie(&self, key: &str, value: Option<&str>) -> Cookie<'static> {
        let encoded = value.map(encode_value).unwrap_or_default();

        let mut cookie = Cookie::build(cookie_name(self.scope, key), encoded)
            .path("/")
            .http_only(true)
            .secure(self.settings.secure)
            .same_site(SameSite::Lax)
            .finish();

        match value {
            None => cookie.make_removal(),
            Some(_) if self.scope == PersistenceScope::Device => cookie.set_max_age(
                actix_web::cookie::time::Duration::days(
                    self.settings.remember_me_days.clamp(1, MAX_REMEMBER_ME_DAYS),
                ),
            ),
            Some(_) => {}
        }

        cookie
    }
}

impl Storage for CookieStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.pending.insert(key.to_string(), Some(value.to_string()));
    }

    fn remove_item(&mut self, key: &str) {
        self.values.remove(key);
        self.pending.insert(key.to_string(), None);
    }
}

pub fn cookie_name(scope: PersistenceScope, key: &str) -> String {
    let prefix = match scope {
        PersistenceScope::Session => "tab",
        PersistenceScope::Device => "dev",
    };
    format!("{}_{}", prefix, key)
}

pub fn encode_value(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

fn decode_value(raw: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
    String::from_utf8(bytes).ok()
}

pub fn load_store(req: &HttpRequest, settings: CookieSettings) -> CookieSessionStore {
    ScopedSessionStore::new(
        CookieStorage::from_request(req, PersistenceScope::Session, settings),
        CookieStorage::from_request(req, PersistenceScope::Device, settings),
    )
}

/// Whether the pending changes of both scopes can be stored by the browser.
pub fn store_fits(store: &CookieSessionStore) -> bool {
    store.storage(PersistenceScope::Session).fits() && store.storage(PersistenceScope::Device).fits()
}

/// Writes the pending cookie changes of both scopes onto `resp`.
pub fn apply_store(store: &CookieSessionStore, resp: &mut HttpResponseBuilder) {
    store.storage(PersistenceScope::Session).apply(resp);
    store.storage(PersistenceScope::Device).apply(resp);
}
