//! Admin consent 콜백 요청 DTO
//!
//! Azure AD가 `response_mode=form_post`로 redirect URI에 POST하는 폼 필드를 매핑합니다.
use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;

/// Admin consent 콜백 폼
///
/// 동의가 거부되면 `id_token` 대신 `error`, `error_description`이 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct ConsentCallbackForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id_token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    /// 에러가 있을 경우 (관리자가 거부했거나 에러 발생)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}
