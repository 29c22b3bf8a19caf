//! 라우트 설정 모듈
//!
//! admin consent 흐름과 메일 조회 화면을 `/clientcreds` 아래에 묶고,
//! 헬스체크 엔드포인트를 제공합니다.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | `/clientcreds/`로 이동 |
//! | GET | `/health` | 헬스체크 |
//! | GET | `/clientcreds/`, `/clientcreds/home/` | admin consent 링크 |
//! | POST | `/clientcreds/get_consent/` | Azure AD consent 콜백 |
//! | GET | `/clientcreds/get_consent/` | 홈으로 이동 |
//! | GET, POST | `/clientcreds/mail/` | 메일함 조회 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub const CLIENTCREDS_SCOPE: &str = "/clientcreds";
pub const HOME_PATH: &str = "/clientcreds/home/";
pub const CONSENT_PATH: &str = "/clientcreds/get_consent/";
pub const MAIL_PATH: &str = "/clientcreds/mail/";

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(web::redirect("/", "/clientcreds/"));

    configure_clientcreds_routes(cfg);
}

/// admin consent 및 메일 조회 라우트
///
/// `get_consent`는 Azure AD가 직접 POST하는 콜백이므로 인증 미들웨어를 두지 않습니다.
fn configure_clientcreds_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(CLIENTCREDS_SCOPE)
            .service(handlers::consent::home)
            .service(handlers::consent::home_explicit)
            .service(handlers::consent::consent_callback)
            .service(handlers::consent::consent_redirect)
            .service(handlers::mail::mail_form)
            .service(handlers::mail::list_mail)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "clientcred_mail_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "identity_provider": "Azure AD",
///     "grant": "client_credentials (JWT bearer assertion)",
///     "views": "Handlebars"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "identity_provider": "Azure AD",
            "grant": "client_credentials (JWT bearer assertion)",
            "views": "Handlebars"
        }
    }))
}
