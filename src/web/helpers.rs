use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use hotelpress::models::{Role, UserProfile};
use hotelpress::services::{AuthService, GuardDecision, Navigation, RouteGuard};

use crate::web::cookies::{CookieSessionStore, apply_store, load_store};
use crate::web::state::AppState;

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// Auth service bound to the cookies of this request.
pub fn auth_service(req: &HttpRequest, state: &AppState) -> AuthService<CookieSessionStore> {
    AuthService::new(state.auth_client.clone(), load_store(req, state.cookies))
}

/// Full-page navigation carrying any session cookie changes.
pub fn navigate(req: &HttpRequest, to: Navigation, store: &CookieSessionStore) -> HttpResponse {
    redirect(req, to.path(), store)
}

pub fn redirect(req: &HttpRequest, location: &str, store: &CookieSessionStore) -> HttpResponse {
    let mut resp = if is_htmx(req) {
        let mut builder = HttpResponse::Ok();
        builder.insert_header(("HX-Redirect", location.to_string()));
        builder
    } else {
        let mut builder = HttpResponse::SeeOther();
        builder.insert_header(("Location", location.to_string()));
        builder
    };

    apply_store(store, &mut resp);
    resp.finish()
}

/// Runs the route guard for this request.
///
/// `Err` holds the redirect to send instead of the protected page, including
/// the cookie removals of a forced logout.
pub fn require_session(
    req: &HttpRequest,
    state: &AppState,
    required_role: Option<&Role>,
) -> Result<UserProfile, HttpResponse> {
    let mut auth = auth_service(req, state);

    match RouteGuard::check(&mut auth, required_role) {
        GuardDecision::Render(user) => Ok(user),
        GuardDecision::Redirect(to) => Err(navigate(req, to, auth.store())),
    }
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with(HttpResponse::Ok(), t)
}

pub fn render_with<T: Template>(mut builder: actix_web::HttpResponseBuilder, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => builder
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}
