//! 메일 조회 HTTP Handlers
//!
//! admin consent로 받은 app-only 토큰으로 테넌트 내 임의 사용자의 메일함을 조회합니다.
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::mail::{MailLookupForm, MessageSummary};
use crate::errors::AppError;
use crate::handlers::{AppState, ACCESS_TOKEN_COOKIE};
use crate::routes::{HOME_PATH, MAIL_PATH};

/// 메일함 조회 폼
///
/// # Endpoint
/// `GET /clientcreds/mail/`
#[get("/mail/")]
pub async fn mail_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let html = state.views.render_mail(MAIL_PATH, "NONE", &[])?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

/// 사용자 메일함의 최근 메일 10건
///
/// 액세스 토큰 쿠키가 없으면 홈으로 이동합니다.
///
/// # Endpoint
/// `POST /clientcreds/mail/`
#[post("/mail/")]
pub async fn list_mail(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<MailLookupForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let Some(access_token) = req.cookie(ACCESS_TOKEN_COOKIE) else {
        log::info!("No access token cookie, redirecting to home");
        return Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, HOME_PATH))
            .finish());
    };

    let messages = state
        .mail_service
        .list_recent_messages(access_token.value(), &form.user_email)
        .await?;

    let summaries: Vec<MessageSummary> = messages.iter().map(MessageSummary::from).collect();
    log::info!("📬 {} messages for {}", summaries.len(), form.user_email);

    let html = state.views.render_mail(MAIL_PATH, &form.user_email, &summaries)?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}
