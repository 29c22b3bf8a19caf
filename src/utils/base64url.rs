//! # Compact 토큰 세그먼트 인코딩
//!
//! ID 토큰 디코더와 클라이언트 어설션 빌더가 함께 사용하는 base64url 헬퍼입니다.
//!
//! - 인코딩: base64url, 끝의 `=` 패딩 제거
//! - 디코딩: 누락된 `=` 패딩 복원 후 base64url 디코딩

use base64::{Engine as _, engine::general_purpose};

/// 바이트를 패딩 없는 base64url 문자열로 인코딩합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::utils::base64url::encode_segment;
///
/// assert_eq!(encode_segment(br#"{"alg":"none"}"#), "eyJhbGciOiJub25lIn0");
/// ```
pub fn encode_segment(bytes: impl AsRef<[u8]>) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// base64 세그먼트의 `=` 패딩을 복원합니다.
///
/// 길이를 4로 나눈 나머지에 따라:
///
/// | 나머지 | 처리 |
/// |--------|------|
/// | 0 | 그대로 |
/// | 1 | 그대로 (잘못된 입력, 디코딩 단계에서 실패) |
/// | 2 | `==` 추가 |
/// | 3 | `=` 추가 |
pub fn restore_padding(segment: &str) -> String {
    let mut padded = segment.to_string();
    match segment.len() % 4 {
        2 => padded.push_str("=="),
        3 => padded.push('='),
        _ => {}
    }
    padded
}

/// 패딩을 복원한 뒤 base64url 세그먼트를 디코딩합니다.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let padded = restore_padding(segment);
    log::debug!("String with padding added: {} chars -> {} chars", segment.len(), padded.len());

    general_purpose::URL_SAFE.decode(padded)
}
