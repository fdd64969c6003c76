use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use hotelpress::services::{menu_for, screen_for};

use crate::web::helpers::{render, require_session};
use crate::web::state::AppState;
use crate::web::templates::AdminPageTemplate;

/// Home route: the dashboard.
#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin"))
        .finish()
}

#[get("/admin")]
pub async fn dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    admin_page(&state, &req, "/admin")
}

#[get("/admin/{section:.*}")]
pub async fn section(
    state: web::Data<AppState>,
    req: HttpRequest,
    section: web::Path<String>,
) -> impl Responder {
    let section = section.trim_matches('/');
    let path = if section.is_empty() {
        "/admin".to_string()
    } else {
        format!("/admin/{}", section)
    };
    admin_page(&state, &req, &path)
}

fn admin_page(state: &AppState, req: &HttpRequest, path: &str) -> HttpResponse {
    let Some(screen) = screen_for(path) else {
        return HttpResponse::NotFound().body("Page not found");
    };

    let user = match require_session(req, state, screen.required_role.as_ref()) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let menu = menu_for(&user.role());
    render(AdminPageTemplate::new(screen.label, &user, &menu, path))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(dashboard)
        .service(section);
}
