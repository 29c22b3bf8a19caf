//! 토큰 엔드포인트 응답 모델
//!
//! 토큰 엔드포인트의 JSON 본문은 HTTP 상태 코드와 관계없이 그대로 전달됩니다.
//! 호출자는 [`TokenResponse`]의 형태를 보고 성공/실패를 판단합니다.
//!
//! | 본문 | 결과 |
//! |------|------|
//! | `{"access_token": ..., "token_type": ..., "expires_in": ...}` | [`TokenResponse::Issued`] |
//! | `{"error": ..., "error_description": ...}` | [`TokenResponse::ProviderError`] |
//! | 그 밖의 JSON 본문 | [`TokenResponse::Unrecognized`] |
//! | (요청 전) ID 토큰에서 테넌트를 찾지 못함 | [`TokenResponse::NoTenant`] |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ExchangeError, NoTenantError};
use crate::utils::string_utils::deserialize_lenient_i64;

/// 발급된 액세스 토큰
///
/// 알려진 필드 외의 값(`resource`, `expires_on`, `not_before` 등)은 `extra`에 보존됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_lenient_i64")]
    pub expires_in: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 프로바이더가 반환한 에러 본문
///
/// `invalid_client`, `invalid_grant`, `unauthorized_client` 등.
/// `error_codes`, `trace_id`, `correlation_id` 같은 부가 필드는 `extra`에 보존됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 토큰 교환 결과
#[derive(Debug)]
pub enum TokenResponse {
    Issued(IssuedToken),
    ProviderError(ProviderErrorBody),
    /// 토큰도 OAuth 에러도 아닌 JSON 본문 (원본 그대로)
    Unrecognized { status: u16, body: Value },
    NoTenant(NoTenantError),
}

impl TokenResponse {
    /// 토큰 엔드포인트 응답 본문을 해석합니다.
    ///
    /// `error` 필드가 있으면 상태 코드와 관계없이 [`TokenResponse::ProviderError`]입니다.
    /// 어느 형태에도 맞지 않는 JSON은 [`TokenResponse::Unrecognized`]로 그대로 돌려주고,
    /// JSON이 아닌 본문만 에러입니다.
    pub fn from_body(status: u16, body: &[u8]) -> Result<Self, ExchangeError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|source| ExchangeError::MalformedResponse { status, source })?;

        if value.get("error").is_some() {
            if let Ok(error) = ProviderErrorBody::deserialize(&value) {
                return Ok(TokenResponse::ProviderError(error));
            }
        } else if let Ok(issued) = IssuedToken::deserialize(&value) {
            return Ok(TokenResponse::Issued(issued));
        }

        Ok(TokenResponse::Unrecognized { status, body: value })
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            TokenResponse::Issued(token) => Some(&token.access_token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issued_token_with_string_expiry() {
        let body = br#"{"token_type":"Bearer","expires_in":"3599","resource":"https://outlook.office365.com/","access_token":"eyJ0eXAi"}"#;

        match TokenResponse::from_body(200, body).unwrap() {
            TokenResponse::Issued(token) => {
                assert_eq!(token.access_token, "eyJ0eXAi");
                assert_eq!(token.token_type.as_deref(), Some("Bearer"));
                assert_eq!(token.expires_in, Some(3599));
                assert_eq!(token.extra.get("resource"), Some(&json!("https://outlook.office365.com/")));
            }
            other => panic!("Expected Issued, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_error_is_kept_verbatim() {
        let original = json!({
            "error": "invalid_client",
            "error_description": "AADSTS70002: Error validating credentials.",
            "error_codes": [70002],
            "trace_id": "0b7f"
        });
        let body = serde_json::to_vec(&original).unwrap();

        match TokenResponse::from_body(400, &body).unwrap() {
            TokenResponse::ProviderError(error) => {
                assert_eq!(error.error, "invalid_client");
                assert_eq!(serde_json::to_value(&error).unwrap(), original);
            }
            other => panic!("Expected ProviderError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_field_wins_over_success_status() {
        let response = TokenResponse::from_body(200, br#"{"error":"temporarily_unavailable"}"#).unwrap();

        assert!(matches!(response, TokenResponse::ProviderError(_)));
        assert!(response.access_token().is_none());
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let result = TokenResponse::from_body(502, b"<html>Bad Gateway</html>");

        match result {
            Err(ExchangeError::MalformedResponse { status, .. }) => assert_eq!(status, 502),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_json_is_passed_through() {
        let graph_style = json!({"error": {"code": "BadRequest", "message": "Invalid request."}});
        let body = serde_json::to_vec(&graph_style).unwrap();

        match TokenResponse::from_body(400, &body).unwrap() {
            TokenResponse::Unrecognized { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, graph_style);
            }
            other => panic!("Expected Unrecognized, got {:?}", other),
        }

        let response = TokenResponse::from_body(503, br#"{"message":"service unavailable"}"#).unwrap();
        assert!(matches!(
            response,
            TokenResponse::Unrecognized { status: 503, ref body } if body["message"] == "service unavailable"
        ));

        let response = TokenResponse::from_body(200, br#"{"token_type":"Bearer"}"#).unwrap();
        assert!(matches!(response, TokenResponse::Unrecognized { status: 200, .. }));
        assert!(response.access_token().is_none());
    }
}
