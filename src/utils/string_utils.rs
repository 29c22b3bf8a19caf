//! # 문자열 유틸리티
//!
//! 폼 입력과 토큰 응답 처리에 쓰이는 공통 문자열 함수들입니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  eyJ...  ", "id_token").unwrap(), "eyJ...");
/// assert!(validate_required_string("   ", "id_token").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 폼 POST에서 `code=` 처럼 값 없이 넘어오는 필드를 None으로 정리합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct ConsentForm {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     code: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 숫자 또는 숫자 문자열을 `i64`로 읽는 serde deserializer
///
/// Azure AD v1 토큰 엔드포인트는 `expires_in`을 `"3599"` 같은 문자열로,
/// 다른 프로바이더는 숫자로 반환합니다. 해석할 수 없는 값은 None이 됩니다.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  code  ".to_string())), Some("code".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_lenient_i64() {
        #[derive(Deserialize)]
        struct Expiry {
            #[serde(default, deserialize_with = "deserialize_lenient_i64")]
            expires_in: Option<i64>,
        }

        let parsed: Expiry = serde_json::from_str(r#"{"expires_in": "3599"}"#).unwrap();
        assert_eq!(parsed.expires_in, Some(3599));

        let parsed: Expiry = serde_json::from_str(r#"{"expires_in": 3600}"#).unwrap();
        assert_eq!(parsed.expires_in, Some(3600));

        let parsed: Expiry = serde_json::from_str(r#"{"expires_in": "soon"}"#).unwrap();
        assert_eq!(parsed.expires_in, None);

        let parsed: Expiry = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.expires_in, None);
    }
}
