use actix_web::{HttpResponse, Responder, post, web};

use hotelpress::services::UserDirectory;
use hotelpress::types::Credentials;

/// Development stand-in for the external auth endpoint.
#[post("/api/auth/login")]
pub async fn auth_login(
    directory: web::Data<UserDirectory>,
    body: web::Json<Credentials>,
) -> impl Responder {
    let credentials = body.into_inner();
    let directory = directory.into_inner();

    // Argon2 verification is CPU bound; keep it off the worker thread
    let reply = match web::block(move || directory.authenticate(&credentials)).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("Stub auth worker failed: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    if reply.token.is_some() {
        HttpResponse::Ok().json(reply)
    } else {
        HttpResponse::Unauthorized().json(reply)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_login);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web::Data};

    use hotelpress::models::Role;
    use hotelpress::types::LoginResponse;

    use super::*;

    fn directory() -> Data<UserDirectory> {
        let mut directory = UserDirectory::new();
        directory
            .add_user("admin", "admin123", &Role::SuperAdmin, true)
            .expect("Failed to add admin");
        Data::new(directory)
    }

    #[actix_web::test]
    async fn test_stub_endpoint_grants_token() {
        let app = test::init_service(App::new().app_data(directory()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(Credentials::new("admin", "admin123"))
            .to_request();
        let reply: LoginResponse = test::call_and_read_body_json(&app, req).await;

        assert!(reply.token.is_some());
        assert_eq!(reply.user.unwrap().role(), Role::SuperAdmin);
    }

    #[actix_web::test]
    async fn test_stub_endpoint_rejects_with_message() {
        let app = test::init_service(App::new().app_data(directory()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(Credentials::new("admin", "wrong"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);

        let reply: LoginResponse = test::read_body_json(resp).await;
        assert!(reply.token.is_none());
        assert!(reply.message.is_some());
    }
}
