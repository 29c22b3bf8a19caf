//! Outlook 메일 REST API 서비스
//!
//! app-only 액세스 토큰으로 임의 사용자의 메일함을 조회합니다.
//! 응답은 타입 모델 없이 JSON 그대로 반환됩니다.

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use crate::config::MailApiConfig;
use crate::errors::AppError;

/// 최근 메일 조회 쿼리 (필요한 필드만, 수신 시각 역순, 10건)
const RECENT_MESSAGES_QUERY: &str =
    "$select=From,Subject,DateTimeReceived&$orderby=DateTimeReceived desc&$top=10";

/// Outlook 메일 API 서비스
#[derive(Debug, Clone)]
pub struct MailService {
    client: reqwest::Client,
    config: MailApiConfig,
}

impl MailService {
    pub fn new(client: reqwest::Client, config: MailApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &MailApiConfig {
        &self.config
    }

    /// 인증된 REST API 호출
    ///
    /// # 요청 헤더
    ///
    /// | 헤더 | 값 |
    /// |------|-----|
    /// | `Authorization` | `Bearer {access_token}` |
    /// | `Accept` | `application/json` |
    /// | `client-request-id` | 요청마다 새 UUID v4 |
    /// | `return-client-request-id` | `true` |
    ///
    /// # 반환값
    ///
    /// * `Ok(Value)` - 파싱된 JSON 본문 (본문이 없으면 `Value::Null`)
    /// * `Err(AppError::ExternalServiceError)` - 통신 오류 또는 2xx 이외 응답
    pub async fn make_api_call(
        &self,
        method: Method,
        url: &str,
        access_token: &str,
        payload: Option<&Value>,
    ) -> Result<Value, AppError> {
        let request_id = Uuid::new_v4().to_string();
        log::debug!("➡️ {} {} (client-request-id: {})", method, url, request_id);

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("client-request-id", request_id.as_str())
            .header("return-client-request-id", "true");

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 API 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ {} {} returned {} (client-request-id: {})", method, url, status, request_id);
            return Err(AppError::ExternalServiceError(format!(
                "메일 API 호출 실패 ({}): {}", status, error_text
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 API 응답 수신 실패: {}", e)))?;

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body)
            .map_err(|e| AppError::ExternalServiceError(format!("메일 API 응답 파싱 실패: {}", e)))
    }

    /// 사용자 메일함의 최근 메일 10건을 조회합니다.
    ///
    /// 응답의 `value` 배열을 그대로 반환합니다.
    pub async fn list_recent_messages(
        &self,
        access_token: &str,
        user_email: &str,
    ) -> Result<Vec<Value>, AppError> {
        let url = self.recent_messages_url(user_email);
        log::debug!("POST to mail for user: {}", user_email);

        let mut messages = self.make_api_call(Method::GET, &url, access_token, None).await?;

        match messages.get_mut("value").map(Value::take) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(AppError::ExternalServiceError(
                "메일 API 응답에 value 배열이 없습니다".to_string(),
            )),
        }
    }

    fn recent_messages_url(&self, user_email: &str) -> String {
        // OData 문자열 리터럴 안의 작은따옴표는 두 번 써서 이스케이프
        let user = user_email.replace('\'', "''");
        format!("{}/users('{}')/Messages/?{}", self.config.api_base, user, RECENT_MESSAGES_QUERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn service(api_base: String) -> MailService {
        MailService::new(
            reqwest::Client::new(),
            MailApiConfig { resource: "https://outlook.office365.com/".to_string(), api_base },
        )
    }

    #[test]
    fn test_recent_messages_url() {
        let service = service("https://outlook.office365.com/api/v1.0".to_string());

        assert_eq!(
            service.recent_messages_url("admin@contoso.com"),
            "https://outlook.office365.com/api/v1.0/users('admin@contoso.com')/Messages/?$select=From,Subject,DateTimeReceived&$orderby=DateTimeReceived desc&$top=10"
        );
        assert!(service.recent_messages_url("o'brien@contoso.com").contains("users('o''brien@contoso.com')"));
    }

    #[tokio::test]
    async fn test_list_recent_messages() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1.0/users('admin@contoso.com')/Messages/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("$select".into(), "From,Subject,DateTimeReceived".into()),
                Matcher::UrlEncoded("$orderby".into(), "DateTimeReceived desc".into()),
                Matcher::UrlEncoded("$top".into(), "10".into()),
            ]))
            .match_header("authorization", "Bearer app-only-token")
            .match_header("accept", "application/json")
            .match_header("return-client-request-id", "true")
            .match_header("client-request-id", Matcher::Regex("^[0-9a-f-]{36}$".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({
                "@odata.context": "https://outlook.office365.com/api/v1.0/$metadata#Users('admin%40contoso.com')/Messages",
                "value": [
                    {"Subject": "Hello", "DateTimeReceived": "2015-10-21T17:03:11Z",
                     "From": {"EmailAddress": {"Address": "alex@contoso.com", "Name": "Alex"}}}
                ]
            }).to_string())
            .create_async()
            .await;

        let messages = service(format!("{}/api/v1.0", server.url()))
            .list_recent_messages("app-only-token", "admin@contoso.com")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["Subject"], "Hello");
    }

    #[tokio::test]
    async fn test_make_api_call_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1.0/me")
            .with_status(401)
            .with_body(r#"{"error":{"code":"InvalidAudience"}}"#)
            .create_async()
            .await;

        let result = service(server.url())
            .make_api_call(Method::GET, &format!("{}/api/v1.0/me", server.url()), "bad", None)
            .await;

        match result {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("401")),
            other => panic!("Expected ExternalServiceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_make_api_call_sends_payload_and_handles_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1.0/me/sendmail")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"Message": {"Subject": "Hi"}})))
            .with_status(202)
            .create_async()
            .await;

        let payload = json!({"Message": {"Subject": "Hi"}});
        let result = service(server.url())
            .make_api_call(Method::POST, &format!("{}/api/v1.0/me/sendmail", server.url()), "token", Some(&payload))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_list_recent_messages_without_value() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let result = service(server.url()).list_recent_messages("token", "admin@contoso.com").await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
