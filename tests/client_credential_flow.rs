use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use mockito::Matcher;
use serde_json::json;

use clientcred_mail_service::config::{AzureAdEndpoints, Environment, MailApiConfig};
use clientcred_mail_service::domain::models::{ApplicationCredential, ClientAssertionClaims, TokenResponse};
use clientcred_mail_service::handlers::{AppState, ACCESS_TOKEN_COOKIE};
use clientcred_mail_service::routes::configure_all_routes;
use clientcred_mail_service::services::auth::{
    ClientCredentialService, RsaSigner, TokenEndpointTransport, TransportResponse,
};
use clientcred_mail_service::services::mail::MailService;
use clientcred_mail_service::views::ViewRenderer;

const PRIVATE_KEY_PEM: &str = include_str!("fixtures/test_rsa_private_key.pem");
const PUBLIC_KEY_PEM: &str = include_str!("fixtures/test_rsa_public_key.pem");
const ID_TOKEN: &str = "eyJhbGciOiJub25lIn0.eyJ0aWQiOiJhYmMxMjMifQ.";
const REDIRECT_URI: &str = "http://localhost:8080/clientcreds/get_consent/";
const RESOURCE: &str = "https://outlook.office365.com/";

fn credential() -> Arc<ApplicationCredential> {
    Arc::new(ApplicationCredential::new(
        "11111111-2222-3333-4444-555555555555",
        "tests/fixtures/test_rsa_private_key.pem",
        "Xk0nsTSVYLjTx0ZwrR9mL7qrObg",
    ))
}

fn signer() -> Arc<RsaSigner> {
    Arc::new(RsaSigner::from_key_material(PRIVATE_KEY_PEM.as_bytes()).unwrap())
}

/// 제출된 form을 기록하는 전송 계층
#[derive(Default)]
struct CapturingTransport {
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

#[async_trait]
impl TokenEndpointTransport for CapturingTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, reqwest::Error> {
        let form = form.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self.requests.lock().unwrap().push((url.to_string(), form));

        Ok(TransportResponse {
            status: 200,
            body: br#"{"token_type":"Bearer","expires_in":"3599","access_token":"app-only-token"}"#.to_vec(),
        })
    }
}

#[core::prelude::v1::test]
fn signer_loads_key_from_file() {
    let credential = credential();
    let signer = RsaSigner::from_file(credential.certificate_path()).unwrap();

    assert_eq!(signer.modulus_bits(), 2048);
}

#[tokio::test]
async fn submitted_assertion_verifies_against_public_key() {
    let transport = Arc::new(CapturingTransport::default());
    let service = ClientCredentialService::new(
        credential(),
        signer(),
        AzureAdEndpoints::default(),
        transport.clone(),
    );

    let response = service.exchange_token(ID_TOKEN, REDIRECT_URI, RESOURCE).await.unwrap();
    assert_eq!(response.access_token(), Some("app-only-token"));

    let requests = transport.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let (url, form) = &requests[0];
    assert_eq!(url, "https://login.microsoftonline.com/abc123/oauth2/token");

    let assertion = form
        .iter()
        .find(|(k, _)| k == "client_assertion")
        .map(|(_, v)| v.clone())
        .unwrap();

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[url.as_str()]);
    validation.set_issuer(&["11111111-2222-3333-4444-555555555555"]);
    let key = DecodingKey::from_rsa_pem(PUBLIC_KEY_PEM.as_bytes()).unwrap();
    let decoded = jsonwebtoken::decode::<ClientAssertionClaims>(&assertion, &key, &validation).unwrap();

    assert_eq!(decoded.header.x5t.as_deref(), Some("Xk0nsTSVYLjTx0ZwrR9mL7qrObg"));
    assert_eq!(decoded.claims.sub, decoded.claims.iss);
    assert_eq!(decoded.claims.exp - decoded.claims.nbf, 900);
}

#[tokio::test]
async fn provider_error_is_returned_as_data() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "error": "invalid_client",
        "error_description": "AADSTS700027: Client assertion contains an invalid signature."
    });
    let mock = server
        .mock("POST", "/abc123/oauth2/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let service = ClientCredentialService::with_client(
        credential(),
        signer(),
        AzureAdEndpoints::new(server.url()),
        reqwest::Client::new(),
    );

    let response = service.exchange_token(ID_TOKEN, REDIRECT_URI, RESOURCE).await.unwrap();

    mock.assert_async().await;
    match response {
        TokenResponse::ProviderError(error) => assert_eq!(serde_json::to_value(&error).unwrap(), body),
        other => panic!("Expected ProviderError, got {:?}", other),
    }
}

#[actix_web::test]
async fn admin_consent_to_mail_listing() {
    let mut server = mockito::Server::new_async().await;

    let token_mock = server
        .mock("POST", "/abc123/oauth2/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("resource".into(), RESOURCE.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token_type":"Bearer","expires_in":"3599","access_token":"app-only-token"}"#)
        .expect(1)
        .create_async()
        .await;

    let mail_mock = server
        .mock("GET", "/api/v1.0/users('admin@contoso.com')/Messages/")
        .match_query(Matcher::UrlEncoded("$top".into(), "10".into()))
        .match_header("authorization", "Bearer app-only-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"value": [{
                "Subject": "Welcome",
                "DateTimeReceived": "2015-10-21T17:03:11Z",
                "From": {"EmailAddress": {"Address": "it@contoso.com"}}
            }]})
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let state = AppState::new(
        ClientCredentialService::with_client(credential(), signer(), AzureAdEndpoints::new(server.url()), client.clone()),
        MailService::new(
            client,
            MailApiConfig { resource: RESOURCE.to_string(), api_base: format!("{}/api/v1.0", server.url()) },
        ),
        ViewRenderer::new().unwrap(),
        Environment::Test,
    );
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_all_routes)).await;

    // 1. 홈: admin consent 링크
    let req = test::TestRequest::get().uri("/clientcreds/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(&format!("{}/common/oauth2/authorize?", server.url())));

    // 2. consent 콜백: 토큰 교환 후 메일 화면으로 이동
    let req = test::TestRequest::post()
        .uri("/clientcreds/get_consent/")
        .set_form([("id_token", ID_TOKEN), ("code", "AAABAAAA"), ("state", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/clientcreds/mail/");

    let token = resp
        .response()
        .cookies()
        .find(|c| c.name() == ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap();

    // 3. 메일 조회
    let req = test::TestRequest::post()
        .uri("/clientcreds/mail/")
        .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, token))
        .set_form([("user_email", "admin@contoso.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("<td>it@contoso.com</td>"));
    assert!(html.contains("<td>Welcome</td>"));

    token_mock.assert_async().await;
    mail_mock.assert_async().await;
}
