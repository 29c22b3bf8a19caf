//! Admin consent URL 응답 DTO
use serde::{Deserialize, Serialize};

/// Admin consent URL 생성 결과
///
/// `nonce`는 호출자가 재전송 탐지에 쓸 수 있도록 함께 반환되지만
/// 콜백에서 서버가 검증하지는 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConsentUrlResponse {
    pub consent_url: String,
    pub nonce: String,
}
