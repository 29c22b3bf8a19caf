//! 메일 조회 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 메일함 조회 폼
#[derive(Debug, Deserialize, Validate)]
pub struct MailLookupForm {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub user_email: String,
}
