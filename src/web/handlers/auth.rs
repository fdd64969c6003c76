use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use hotelpress::services::{LoginOutcome, RouteGuard};

use crate::web::cookies::{apply_store, store_fits};
use crate::web::forms::LoginForm;
use crate::web::helpers::{auth_service, navigate, redirect, render, render_with};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

pub const AFTER_LOGIN: &str = "/admin";

pub const SESSION_TOO_LARGE: &str =
    "Your account profile is too large to keep you signed in. Please contact an administrator.";
pub const PROFILE_MISSING: &str =
    "Signed in, but no account profile was returned. Please contact an administrator.";

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let mut auth = auth_service(&req, &state);

    // A live session skips the form
    if RouteGuard::check(&mut auth, None).is_render() {
        return redirect(&req, AFTER_LOGIN, auth.store());
    }

    // Carries the cookie removals when the guard signed out a dead session
    let mut builder = HttpResponse::Ok();
    apply_store(auth.store(), &mut builder);

    render_with(
        builder,
        LoginTemplate {
            error: None,
            username: String::new(),
        },
    )
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let username = form.username.trim().to_string();

    if !state.rate_limiter.allow_login(&req) {
        log::warn!("Login rate limit hit for {:?}", username);
        return render_with(
            HttpResponse::TooManyRequests(),
            LoginTemplate {
                error: Some("Too many login attempts. Please try again later.".to_string()),
                username,
            },
        );
    }

    if let Err(e) = form.validate() {
        return render(LoginTemplate {
            error: Some(e.to_string()),
            username,
        });
    }

    let mut auth = auth_service(&req, &state);

    match auth.login(&form.credentials(), form.remember_me()).await {
        // Nothing is written when the browser would drop part of the session
        LoginOutcome::Success { .. } if !store_fits(auth.store()) => render(LoginTemplate {
            error: Some(SESSION_TOO_LARGE.to_string()),
            username,
        }),
        LoginOutcome::Success { user: Some(_) } => redirect(&req, AFTER_LOGIN, auth.store()),
        LoginOutcome::Success { user: None } => {
            let mut builder = HttpResponse::Ok();
            apply_store(auth.store(), &mut builder);
            render_with(
                builder,
                LoginTemplate {
                    error: Some(PROFILE_MISSING.to_string()),
                    username,
                },
            )
        }
        LoginOutcome::Failure { message } => render(LoginTemplate {
            error: Some(message),
            username,
        }),
    }
}

#[post("/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let mut auth = auth_service(&req, &state);
    let to = auth.logout();

    navigate(&req, to, auth.store())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout);
}
