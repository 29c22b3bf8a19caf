//! 메일 목록 뷰 DTO
use serde::Serialize;
use serde_json::Value;

/// 메일 목록 화면의 한 행
///
/// 메일 API 응답의 `value` 배열 항목에서 표시에 필요한 필드만 꺼냅니다.
/// 필드가 없으면 빈 문자열로 표시합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSummary {
    pub from: String,
    pub subject: String,
    pub received: String,
}

impl From<&Value> for MessageSummary {
    fn from(message: &Value) -> Self {
        let text = |pointer: &str| {
            message
                .pointer(pointer)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            from: text("/From/EmailAddress/Address"),
            subject: text("/Subject"),
            received: text("/DateTimeReceived"),
        }
    }
}
