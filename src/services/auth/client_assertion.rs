//! 클라이언트 어설션 빌더
//!
//! 토큰 엔드포인트에 클라이언트 시크릿 대신 제출하는 RS256 JWT를 만듭니다.
//!
//! | 클레임 | 값 |
//! |--------|-----|
//! | `alg` (헤더) | `RS256` |
//! | `x5t` (헤더) | 인증서 지문 |
//! | `sub`, `iss` | 클라이언트 ID |
//! | `jti` | UUID v4 (어설션마다 새로 생성) |
//! | `nbf` | 현재 시각 - 300초 |
//! | `exp` | `nbf` + 900초 |
//! | `aud` | 호출할 토큰 엔드포인트 URL |
//!
//! `nbf`를 5분 앞당겨 토큰 엔드포인트와의 시계 오차를 허용하고,
//! 발급 시점 기준 10분 뒤에 만료됩니다.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::{
    ApplicationCredential, ClientAssertion, ClientAssertionClaims, ClientAssertionHeader,
};
use crate::errors::SigningError;
use crate::services::auth::rsa_signer::RsaSigner;
use crate::utils::base64url::encode_segment;

/// `nbf`를 현재 시각보다 앞당기는 시간 (초)
pub const CLOCK_SKEW_SECONDS: i64 = 300;
/// `nbf`부터 `exp`까지의 유효 기간 (초)
pub const ASSERTION_LIFETIME_SECONDS: i64 = 900;

const ASSERTION_ALGORITHM: &str = "RS256";

/// 클라이언트 어설션 빌더
///
/// 자격 증명과 서명기를 읽기 전용으로 공유하므로 동시 호출에 안전합니다.
#[derive(Debug, Clone)]
pub struct ClientAssertionBuilder {
    credential: Arc<ApplicationCredential>,
    signer: Arc<RsaSigner>,
}

impl ClientAssertionBuilder {
    pub fn new(credential: Arc<ApplicationCredential>, signer: Arc<RsaSigner>) -> Self {
        Self { credential, signer }
    }

    /// `audience`(토큰 엔드포인트 URL)용 어설션을 현재 시각 기준으로 만듭니다.
    pub fn build(&self, audience: &str) -> Result<ClientAssertion, SigningError> {
        self.build_at(audience, Utc::now().timestamp())
    }

    /// `issued_at`(Unix timestamp) 기준으로 어설션을 만듭니다.
    pub fn build_at(&self, audience: &str, issued_at: i64) -> Result<ClientAssertion, SigningError> {
        let header = ClientAssertionHeader {
            alg: ASSERTION_ALGORITHM.to_string(),
            x5t: self.credential.certificate_thumbprint().to_string(),
        };

        let nbf = issued_at - CLOCK_SKEW_SECONDS;
        let claims = ClientAssertionClaims {
            sub: self.credential.client_id().to_string(),
            iss: self.credential.client_id().to_string(),
            jti: Uuid::new_v4().to_string(),
            exp: nbf + ASSERTION_LIFETIME_SECONDS,
            nbf,
            aud: audience.to_string(),
        };

        let signing_input = format!(
            "{}.{}",
            encode_segment(serde_json::to_vec(&header)?),
            encode_segment(serde_json::to_vec(&claims)?)
        );
        log::debug!("Client assertion signing input built for aud {}", audience);

        let signature = self.signer.sign(signing_input.as_bytes())?;
        let compact = format!("{}.{}", signing_input, signature);

        Ok(ClientAssertion::new(claims, compact))
    }
}
