//! Admin consent authorize URL 빌더
//!
//! 테넌트 관리자를 Azure AD 멀티 테넌트 authorize 엔드포인트로 보내는 URL을 만듭니다.
//! 관리자가 동의하면 Azure AD가 `redirect_uri`로 `id_token`(과 `code`)을 form POST 합니다.
//!
//! | 파라미터 | 값 |
//! |----------|-----|
//! | `client_id` | 애플리케이션 ID |
//! | `redirect_uri` | 콜백 URL |
//! | `response_type` | `code id_token` |
//! | `scope` | `openid` |
//! | `nonce` | UUID v4 |
//! | `prompt` | `admin_consent` |
//! | `response_mode` | `form_post` |
//! | `resource` | 동의 대상 API 리소스 |
//!
//! `nonce`는 응답에 함께 반환되지만 콜백에서 검증하지 않습니다.

use uuid::Uuid;

use crate::config::AzureAdEndpoints;
use crate::domain::dto::consent::AdminConsentUrlResponse;

/// admin consent URL을 생성합니다.
///
/// 입력값은 검증하지 않으며, 잘못된 값은 Azure AD가 거부합니다.
/// `nonce`를 제외하면 같은 입력에 같은 URL을 돌려줍니다.
pub fn build_authorization_url(
    endpoints: &AzureAdEndpoints,
    client_id: &str,
    redirect_uri: &str,
    resource: &str,
) -> AdminConsentUrlResponse {
    let nonce = Uuid::new_v4().to_string();

    let params = [
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code id_token"),
        ("scope", "openid"),
        ("nonce", nonce.as_str()),
        ("prompt", "admin_consent"),
        ("response_mode", "form_post"),
        ("resource", resource),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let consent_url = format!("{}?{}", endpoints.authorize_url(), query_string);
    log::debug!("Admin consent URL generated (redirect_uri: {})", redirect_uri);

    AdminConsentUrlResponse { consent_url, nonce }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const REDIRECT_URI: &str = "http://localhost:8080/clientcreds/get_consent/";
    const RESOURCE: &str = "https://outlook.office365.com/";

    fn query(url: &str) -> HashMap<String, String> {
        reqwest::Url::parse(url)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn test_authorization_url_parameters() {
        let response = build_authorization_url(&AzureAdEndpoints::default(), "client-123", REDIRECT_URI, RESOURCE);

        assert!(response
            .consent_url
            .starts_with("https://login.microsoftonline.com/common/oauth2/authorize?"));

        let params = query(&response.consent_url);
        assert_eq!(params.len(), 8);
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(params["redirect_uri"], REDIRECT_URI);
        assert_eq!(params["response_type"], "code id_token");
        assert_eq!(params["scope"], "openid");
        assert_eq!(params["nonce"], response.nonce);
        assert_eq!(params["prompt"], "admin_consent");
        assert_eq!(params["response_mode"], "form_post");
        assert_eq!(params["resource"], RESOURCE);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let response = build_authorization_url(&AzureAdEndpoints::default(), "client-123", REDIRECT_URI, RESOURCE);

        assert!(response.consent_url.contains("response_type=code%20id_token"));
        assert!(response.consent_url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fclientcreds%2Fget_consent%2F"
        ));
    }

    #[test]
    fn test_nonce_is_fresh_uuid() {
        let endpoints = AzureAdEndpoints::default();
        let first = build_authorization_url(&endpoints, "client-123", REDIRECT_URI, RESOURCE);
        let second = build_authorization_url(&endpoints, "client-123", REDIRECT_URI, RESOURCE);

        assert!(Uuid::parse_str(&first.nonce).is_ok());
        assert_ne!(first.nonce, second.nonce);
        assert_eq!(
            first.consent_url.replace(&first.nonce, ""),
            second.consent_url.replace(&second.nonce, "")
        );
    }
}
