//! 외부 HTTP 호출(토큰 엔드포인트, 메일 API)에 쓰는 reqwest 클라이언트 설정

use std::env;
use std::time::Duration;

use log::warn;

use crate::errors::ConfigError;

/// HTTP 클라이언트 설정
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// 요청 타임아웃
    pub timeout: Duration,
    /// User-Agent 헤더
    pub user_agent: String,
    /// TLS 인증서 검증 생략 (트래픽 캡처 프록시 디버깅용, 프로덕션 사용 금지)
    pub accept_invalid_certs: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("clientcred-mail-service/{}", env!("CARGO_PKG_VERSION")),
            accept_invalid_certs: false,
        }
    }
}

impl HttpClientConfig {
    /// `HTTP_TIMEOUT_SECONDS`, `HTTP_ACCEPT_INVALID_CERTS`를 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = var("HTTP_TIMEOUT_SECONDS") {
            let seconds = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidVar {
                name: "HTTP_TIMEOUT_SECONDS",
                value: value.clone(),
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        if let Some(value) = var("HTTP_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        name: "HTTP_ACCEPT_INVALID_CERTS",
                        value,
                    });
                }
            };
        }

        Ok(config)
    }

    /// 설정을 적용한 `reqwest::Client`를 만듭니다.
    pub fn build_client(&self) -> Result<reqwest::Client, ConfigError> {
        if self.accept_invalid_certs {
            warn!("⚠️ TLS certificate verification is DISABLED for outbound requests");
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;

        Ok(client)
    }
}
