//! # HTTP Request Handlers Module
//!
//! admin consent 흐름과 메일 조회 화면을 처리하는 핸들러입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (관리자)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (HTML)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) + Views                      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 획득, 메일 API                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Azure AD 토큰 엔드포인트, Outlook REST API      ← External
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 시작 시 [`AppState`]로 한 번 생성되어 `web::Data`로 공유됩니다.
//! 모든 필드는 불변이므로 워커 스레드 간 잠금이 필요 없습니다.
//!
//! ```rust,ignore
//! #[post("/get_consent/")]
//! pub async fn consent_callback(
//!     req: HttpRequest,
//!     state: web::Data<AppState>,
//!     form: web::Form<ConsentCallbackForm>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = state.token_service.exchange_token(...).await?;
//!     ...
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`consent`] - 홈(admin consent 링크), consent 콜백
//! - [`mail`] - 메일함 조회 폼과 결과

pub mod consent;
pub mod mail;

use std::sync::Arc;

use actix_web::HttpRequest;

use crate::config::{AzureAdEndpoints, Environment, HttpClientConfig, MailApiConfig};
use crate::domain::models::ApplicationCredential;
use crate::errors::ConfigError;
use crate::services::auth::{ClientCredentialService, RsaSigner};
use crate::services::mail::MailService;
use crate::views::ViewRenderer;

/// 액세스 토큰을 보관하는 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "clientcreds_access_token";

/// 핸들러가 공유하는 애플리케이션 상태
pub struct AppState {
    pub token_service: ClientCredentialService,
    pub mail_service: MailService,
    pub views: ViewRenderer,
    pub environment: Environment,
}

impl AppState {
    pub fn new(
        token_service: ClientCredentialService,
        mail_service: MailService,
        views: ViewRenderer,
        environment: Environment,
    ) -> Self {
        Self { token_service, mail_service, views, environment }
    }

    /// 환경 변수에서 설정을 읽어 상태를 구성합니다.
    ///
    /// 개인 키는 이 시점에 한 번 로딩되며, 키가 잘못되면 서버가 시작되지 않습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credential = Arc::new(ApplicationCredential::from_env()?);
        let signer = Arc::new(RsaSigner::from_file(credential.certificate_path())?);
        let http_client = HttpClientConfig::from_env()?.build_client()?;

        log::info!("🆔 Azure AD application: {}", credential.client_id());

        let token_service = ClientCredentialService::with_client(
            credential,
            signer,
            AzureAdEndpoints::from_env(),
            http_client.clone(),
        );
        let mail_service = MailService::new(http_client, MailApiConfig::from_env());

        Ok(Self::new(token_service, mail_service, ViewRenderer::new()?, Environment::current()))
    }
}

/// 요청의 스킴/호스트로 절대 URL을 만듭니다.
///
/// admin consent의 `redirect_uri`는 토큰 요청의 `redirect_uri`와 같아야 합니다.
pub(crate) fn absolute_url(req: &HttpRequest, path: &str) -> String {
    let connection = req.connection_info();
    format!("{}://{}{}", connection.scheme(), connection.host(), path)
}
