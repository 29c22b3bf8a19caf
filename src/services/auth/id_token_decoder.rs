//! ID 토큰 디코더
//!
//! admin consent 콜백으로 받은 compact 토큰(`header.payload.signature`)의
//! 페이로드 세그먼트를 클레임 객체로 디코딩합니다.
//!
//! 서명은 검증하지 않습니다. 결과는 테넌트 ID를 찾는 데만 쓰이며,
//! 실제 권한은 이후 토큰 엔드포인트가 클라이언트 어설션으로 판단합니다.
//!
//! # 디코딩 단계
//!
//! 1. `.`으로 분리해 두 번째 세그먼트 추출
//! 2. `=` 패딩 복원 후 base64url 디코딩
//! 3. UTF-8 해석
//! 4. JSON 객체 파싱
//!
//! 어느 단계든 실패하면 원본 입력을 담은 [`TokenDecodeError`]가 반환됩니다.

use serde_json::Value;

use crate::domain::models::IdentityTokenClaims;
use crate::errors::{TokenDecodeError, TokenDecodeFailure};
use crate::utils::base64url::decode_segment;

/// compact 토큰의 페이로드를 클레임으로 디코딩합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let claims = decode("eyJhbGciOiJub25lIn0.eyJ0aWQiOiJhYmMxMjMifQ.")?;
/// assert_eq!(claims.tenant_id(), Some("abc123"));
/// ```
pub fn decode(token: &str) -> Result<IdentityTokenClaims, TokenDecodeError> {
    decode_payload(token).map_err(|kind| {
        log::warn!("❌ Invalid token value: {}", kind);
        TokenDecodeError::new(token, kind)
    })
}

fn decode_payload(token: &str) -> Result<IdentityTokenClaims, TokenDecodeFailure> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or(TokenDecodeFailure::MissingPayload)?;
    log::debug!("ID token payload segment: {} chars", payload.len());

    let bytes = decode_segment(payload)?;
    let text = String::from_utf8(bytes)?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(claims) => Ok(IdentityTokenClaims::new(claims)),
        _ => Err(TokenDecodeFailure::NotAnObject),
    }
}
