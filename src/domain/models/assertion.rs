//! JWT bearer 클라이언트 어설션
//!
//! 클라이언트 시크릿 대신 개인 키 소유를 증명하는 자체 서명 JWT입니다.
//! 토큰 교환마다 새로 만들어지며 저장되거나 재사용되지 않습니다.
//!
//! ```text
//! base64url(header) . base64url(claims) . base64url(RS256 서명)
//! ```

use serde::{Deserialize, Serialize};

/// 어설션 헤더
///
/// `x5t`는 Azure AD가 검증 키(업로드된 인증서)를 선택하는 데 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAssertionHeader {
    pub alg: String,
    pub x5t: String,
}

/// 어설션 페이로드 (RFC 7523)
///
/// - `sub`, `iss`: 클라이언트 ID
/// - `jti`: 어설션마다 새로 생성되는 UUID v4
/// - `nbf`: 발급 시각 - 300초 (시계 오차 허용)
/// - `exp`: `nbf` + 900초
/// - `aud`: 호출하는 토큰 엔드포인트 URL과 정확히 일치
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAssertionClaims {
    pub sub: String,
    pub iss: String,
    pub jti: String,
    pub exp: i64,
    pub nbf: i64,
    pub aud: String,
}

/// 서명이 완료된 compact 형식의 클라이언트 어설션
#[derive(Debug, Clone)]
pub struct ClientAssertion {
    claims: ClientAssertionClaims,
    compact: String,
}

impl ClientAssertion {
    pub(crate) fn new(claims: ClientAssertionClaims, compact: String) -> Self {
        Self { claims, compact }
    }

    pub fn claims(&self) -> &ClientAssertionClaims {
        &self.claims
    }

    /// `header.payload.signature` 문자열
    pub fn as_str(&self) -> &str {
        &self.compact
    }
}
