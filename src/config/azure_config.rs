//! # Azure AD / Outlook 설정
//!
//! 애플리케이션 자격 증명, Azure AD 엔드포인트, Outlook 메일 API 설정을 관리합니다.
//! 모든 값은 시작 시 한 번 읽혀 불변 값으로 서비스에 주입됩니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export AZURE_CLIENT_ID="a1b2c3d4-0000-0000-0000-000000000000"
//! export AZURE_PRIVATE_KEY_PATH="/etc/clientcreds/app_private_key.pem"   # PKCS#1 PEM
//! export AZURE_CERT_THUMBPRINT="base64url-encoded-sha1-thumbprint"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export AZURE_AUTHORITY="https://login.microsoftonline.com"
//! export OUTLOOK_RESOURCE="https://outlook.office365.com/"
//! export OUTLOOK_API_BASE="https://outlook.office365.com/api/v1.0"
//! ```

use std::env;

use crate::domain::models::ApplicationCredential;
use crate::errors::ConfigError;

const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";
const DEFAULT_OUTLOOK_RESOURCE: &str = "https://outlook.office365.com/";
const DEFAULT_OUTLOOK_API_BASE: &str = "https://outlook.office365.com/api/v1.0";

fn required(var: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<String, ConfigError> {
    var(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

fn optional(var: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    var(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl ApplicationCredential {
    /// 환경 변수에서 자격 증명을 읽습니다.
    ///
    /// # Errors
    ///
    /// `AZURE_CLIENT_ID`, `AZURE_PRIVATE_KEY_PATH`, `AZURE_CERT_THUMBPRINT` 중
    /// 하나라도 없거나 비어 있으면 `ConfigError::MissingVar`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self::new(
            required(&var, "AZURE_CLIENT_ID")?,
            required(&var, "AZURE_PRIVATE_KEY_PATH")?,
            required(&var, "AZURE_CERT_THUMBPRINT")?,
        ))
    }
}

/// Azure AD 엔드포인트
///
/// | 엔드포인트 | URL |
/// |------------|-----|
/// | authorize (admin consent) | `{authority}/common/oauth2/authorize` |
/// | token | `{authority}/{tenant}/oauth2/token` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureAdEndpoints {
    authority: String,
}

impl AzureAdEndpoints {
    pub fn new(authority: impl Into<String>) -> Self {
        let authority = authority.into();
        Self { authority: authority.trim_end_matches('/').to_string() }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(optional(&var, "AZURE_AUTHORITY", DEFAULT_AUTHORITY))
    }

    /// 멀티 테넌트 authorize 엔드포인트
    pub fn authorize_url(&self) -> String {
        format!("{}/common/oauth2/authorize", self.authority)
    }

    /// 테넌트별 토큰 엔드포인트
    pub fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/token", self.authority, tenant_id)
    }
}

impl Default for AzureAdEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHORITY)
    }
}

/// Outlook 메일 API 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailApiConfig {
    /// admin consent와 토큰 요청의 `resource` 값
    pub resource: String,
    /// REST API 기본 URL (끝의 `/` 제거)
    pub api_base: String,
}

impl MailApiConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            resource: optional(&var, "OUTLOOK_RESOURCE", DEFAULT_OUTLOOK_RESOURCE),
            api_base: optional(&var, "OUTLOOK_API_BASE", DEFAULT_OUTLOOK_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

impl Default for MailApiConfig {
    fn default() -> Self {
        Self {
            resource: DEFAULT_OUTLOOK_RESOURCE.to_string(),
            api_base: DEFAULT_OUTLOOK_API_BASE.to_string(),
        }
    }
}
