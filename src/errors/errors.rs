//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 클라이언트 자격 증명(client credential) 플로우를 위한 에러 타입들입니다.
//! 웹 계층에서는 `AppError`가 `actix_web::ResponseError`로 HTTP 응답이 되고,
//! 토큰 파이프라인은 단계별로 구분된 에러를 돌려줍니다.
//!
//! ## 에러 분류
//!
//! | 에러 | 발생 위치 | 처리 방식 |
//! |------|-----------|-----------|
//! | `TokenDecodeError` | ID 토큰 디코더 | "테넌트 없음"으로 복구 |
//! | `NoTenantError` | 토큰 교환 | `TokenResponse::NoTenant` 결과로 반환 |
//! | `SigningError` | RSA 서명 | 호출자에게 전파 (치명적) |
//! | `ExchangeError` | 토큰 교환 | 호출자에게 전파 (재시도 없음) |
//! | `ConfigError` | 시작 시 설정 로딩 | 프로세스 시작 중단 |
//!
//! 프로바이더가 돌려준 에러 본문(`invalid_client` 등)은 에러가 아니라
//! `TokenResponse::ProviderError` 데이터로 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let response = service.exchange_token(&form.id_token, &redirect_uri, &resource).await?;
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// HTTP 핸들러에서 반환되어 자동으로 JSON 에러 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 또는 키 구성 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// ID 토큰 디코딩 실패
///
/// 디코딩에 실패한 원본 입력을 그대로 보관합니다.
/// 표시 문자열에는 원본 토큰을 넣지 않습니다.
#[derive(Error, Debug)]
#[error("Invalid token value ({kind})")]
pub struct TokenDecodeError {
    /// 디코딩을 시도한 원본 토큰 문자열
    pub raw: String,
    /// 실패 원인
    #[source]
    pub kind: TokenDecodeFailure,
}

impl TokenDecodeError {
    pub fn new(raw: impl Into<String>, kind: TokenDecodeFailure) -> Self {
        Self { raw: raw.into(), kind }
    }
}

/// ID 토큰 디코딩 단계별 실패 원인
#[derive(Error, Debug)]
pub enum TokenDecodeFailure {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// RSA 서명 실패
///
/// 잘못된 키는 재시도로 해결되지 않는 구성 오류이므로 항상 호출자에게 전파됩니다.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("failed to read private key file '{}': {source}", .path.display())]
    KeyUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid PKCS#1 RSA private key: {0}")]
    InvalidKey(#[from] rsa::pkcs1::Error),

    #[error("RSA signing failed: {0}")]
    Signature(#[from] rsa::signature::Error),

    #[error("failed to serialize assertion segment: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// 테넌트를 찾을 수 없음
#[derive(Error, Debug)]
pub enum NoTenantError {
    #[error("identity token could not be decoded: {0}")]
    Undecodable(#[from] TokenDecodeError),

    #[error("identity token carries no tid claim")]
    MissingTenant,

    #[error("identity token tid claim is not a valid tenant identifier")]
    InvalidTenant,
}

/// 토큰 교환 중 호출자에게 전파되는 실패
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("token endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint returned a non-JSON body (HTTP {status}): {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Signing(e) => AppError::ConfigurationError(e.to_string()),
            other => AppError::ExternalServiceError(other.to_string()),
        }
    }
}

/// 시작 시 설정 로딩 실패
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to register view template: {0}")]
    Template(String),
}
