//! Admin consent HTTP Handlers
//!
//! # Flow
//!
//! 1. `GET /clientcreds/` - admin consent 링크 표시
//! 2. 관리자가 Azure AD에서 동의
//! 3. `POST /clientcreds/get_consent/` - Azure AD가 `id_token`을 form POST
//! 4. 토큰 교환 성공 시 액세스 토큰을 쿠키에 저장하고 메일 화면으로 이동
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::domain::dto::consent::ConsentCallbackForm;
use crate::domain::models::TokenResponse;
use crate::errors::AppError;
use crate::handlers::{absolute_url, AppState, ACCESS_TOKEN_COOKIE};
use crate::routes::{CLIENTCREDS_SCOPE, CONSENT_PATH, HOME_PATH, MAIL_PATH};
use crate::utils::string_utils::validate_required_string;

/// 홈 페이지 (admin consent 링크)
///
/// # Endpoint
/// `GET /clientcreds/`, `GET /clientcreds/home/`
#[get("/")]
pub async fn home(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    render_home(&req, &state)
}

#[get("/home/")]
pub async fn home_explicit(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    render_home(&req, &state)
}

fn render_home(req: &HttpRequest, state: &AppState) -> Result<HttpResponse, AppError> {
    let redirect_uri = absolute_url(req, CONSENT_PATH);
    let consent = state
        .token_service
        .authorization_url(&redirect_uri, &state.mail_service.config().resource);

    let html = state.views.render_home(&consent.consent_url)?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

/// Admin consent 콜백
///
/// Azure AD가 호출하므로 CSRF 토큰 없이 받습니다.
///
/// # Endpoint
/// `POST /clientcreds/get_consent/`
///
/// # Responses
///
/// | 결과 | 응답 |
/// |------|------|
/// | 토큰 발급 | 302 → `/clientcreds/mail/` (쿠키 설정) |
/// | 동의 거부 / 프로바이더 에러 | 400 `ERROR: {error_description}` |
/// | 알 수 없는 JSON 응답 | 400 에러 페이지 (본문 표시) |
/// | 테넌트 없음 | 400 에러 페이지 |
/// | 서명/네트워크 실패 | `AppError` |
#[post("/get_consent/")]
pub async fn consent_callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<ConsentCallbackForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    if let Some(error) = form.error {
        let description = form.error_description.unwrap_or(error);
        log::warn!("⚠️ Admin consent was not granted: {}", description);
        return error_page(&state, &description);
    }

    let id_token = validate_required_string(form.id_token.as_deref().unwrap_or_default(), "id_token")?;
    let redirect_uri = absolute_url(&req, CONSENT_PATH);
    let resource = &state.mail_service.config().resource;

    let response = state
        .token_service
        .exchange_token(&id_token, &redirect_uri, resource)
        .await?;

    match response {
        TokenResponse::Issued(token) => {
            let cookie = Cookie::build(ACCESS_TOKEN_COOKIE, token.access_token)
                .path(CLIENTCREDS_SCOPE)
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(state.environment.secure_cookies())
                .finish();

            Ok(HttpResponse::Found()
                .cookie(cookie)
                .insert_header((header::LOCATION, MAIL_PATH))
                .finish())
        }
        TokenResponse::ProviderError(error) => {
            let description = error.error_description.unwrap_or(error.error);
            error_page(&state, &description)
        }
        TokenResponse::Unrecognized { status, body } => {
            error_page(&state, &format!("Unexpected token endpoint response (HTTP {}): {}", status, body))
        }
        TokenResponse::NoTenant(reason) => error_page(&state, &reason.to_string()),
    }
}

/// `GET /clientcreds/get_consent/` 는 홈으로 이동
#[get("/get_consent/")]
pub async fn consent_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, HOME_PATH))
        .finish()
}

fn error_page(state: &AppState, message: &str) -> Result<HttpResponse, AppError> {
    let html = state.views.render_error(message, HOME_PATH)?;
    Ok(HttpResponse::BadRequest().content_type("text/html; charset=utf-8").body(html))
}
