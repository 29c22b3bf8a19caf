//! # 토큰 교환 서비스
//!
//! admin consent 콜백의 ID 토큰에서 테넌트를 찾고, 그 테넌트의 토큰 엔드포인트에
//! 클라이언트 어설션을 제출해 app-only 액세스 토큰을 받습니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! id_token ──▶ decode ──▶ tid ──▶ {authority}/{tid}/oauth2/token
//!                │                         │
//!                ▼                         ▼
//!        TokenResponse::NoTenant   ClientAssertion (aud = endpoint)
//!        (네트워크 요청 없음)              │
//!                                          ▼
//!                                 POST (form) 1회, 재시도 없음
//!                                          │
//!                                          ▼
//!                       TokenResponse::Issued | ProviderError
//! ```
//!
//! ## 요청 본문
//!
//! | 필드 | 값 |
//! |------|-----|
//! | `resource` | 대상 API 리소스 |
//! | `client_id` | 애플리케이션 ID |
//! | `client_assertion_type` | `urn:ietf:params:oauth:client-assertion-type:jwt-bearer` |
//! | `client_assertion` | 서명된 어설션 |
//! | `grant_type` | `client_credentials` |
//! | `redirect_uri` | 콜백 URL |
//!
//! 응답 본문은 HTTP 상태와 관계없이 그대로 [`TokenResponse`]로 전달됩니다.
//! 서명 실패와 전송 실패만 [`ExchangeError`]로 호출자에게 전파됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = ClientCredentialService::with_client(credential, signer, endpoints, http_client);
//!
//! match service.exchange_token(&id_token, &redirect_uri, &resource).await? {
//!     TokenResponse::Issued(token) => store(token.access_token),
//!     TokenResponse::ProviderError(error) => show(error.error_description),
//!     TokenResponse::NoTenant(reason) => reject(reason),
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AzureAdEndpoints;
use crate::domain::dto::consent::AdminConsentUrlResponse;
use crate::domain::models::{ApplicationCredential, TokenResponse};
use crate::errors::{ExchangeError, NoTenantError};
use crate::services::auth::authorization_url::build_authorization_url;
use crate::services::auth::client_assertion::ClientAssertionBuilder;
use crate::services::auth::id_token_decoder;
use crate::services::auth::rsa_signer::RsaSigner;

pub const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";
pub const GRANT_TYPE: &str = "client_credentials";

/// 토큰 엔드포인트 원시 응답
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// 토큰 엔드포인트로 form POST를 보내는 전송 계층
#[async_trait]
pub trait TokenEndpointTransport: Send + Sync {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, reqwest::Error>;
}

/// reqwest 기반 전송 계층
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenEndpointTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, reqwest::Error> {
        let response = self.client.post(url).form(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

/// 클라이언트 자격 증명 서비스
///
/// 자격 증명, 서명기, 전송 계층을 생성자로 주입받으며 가변 상태가 없습니다.
/// 동시에 여러 테넌트의 콜백을 처리해도 서로 영향을 주지 않습니다.
pub struct ClientCredentialService {
    credential: Arc<ApplicationCredential>,
    endpoints: AzureAdEndpoints,
    assertion_builder: ClientAssertionBuilder,
    transport: Arc<dyn TokenEndpointTransport>,
}

impl ClientCredentialService {
    pub fn new(
        credential: Arc<ApplicationCredential>,
        signer: Arc<RsaSigner>,
        endpoints: AzureAdEndpoints,
        transport: Arc<dyn TokenEndpointTransport>,
    ) -> Self {
        let assertion_builder = ClientAssertionBuilder::new(credential.clone(), signer);

        Self {
            credential,
            endpoints,
            assertion_builder,
            transport,
        }
    }

    /// reqwest 클라이언트를 전송 계층으로 사용하는 서비스를 만듭니다.
    pub fn with_client(
        credential: Arc<ApplicationCredential>,
        signer: Arc<RsaSigner>,
        endpoints: AzureAdEndpoints,
        client: reqwest::Client,
    ) -> Self {
        Self::new(credential, signer, endpoints, Arc::new(ReqwestTransport::new(client)))
    }

    /// admin consent URL을 생성합니다.
    pub fn authorization_url(&self, redirect_uri: &str, resource: &str) -> AdminConsentUrlResponse {
        build_authorization_url(&self.endpoints, self.credential.client_id(), redirect_uri, resource)
    }

    /// ID 토큰을 app-only 액세스 토큰으로 교환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse::Issued)` - 액세스 토큰 발급
    /// * `Ok(TokenResponse::ProviderError)` - 토큰 엔드포인트의 에러 본문 (그대로 전달)
    /// * `Ok(TokenResponse::Unrecognized)` - 그 밖의 JSON 본문 (그대로 전달)
    /// * `Ok(TokenResponse::NoTenant)` - ID 토큰 디코딩 실패 또는 `tid` 없음 (요청 안 함)
    /// * `Err(ExchangeError::Signing)` - 키/서명 구성 오류
    /// * `Err(ExchangeError::Transport)` - 네트워크 오류
    /// * `Err(ExchangeError::MalformedResponse)` - JSON이 아닌 응답 본문
    pub async fn exchange_token(
        &self,
        identity_token: &str,
        redirect_uri: &str,
        resource: &str,
    ) -> Result<TokenResponse, ExchangeError> {
        let tenant_id = match Self::tenant_of(identity_token) {
            Ok(tenant_id) => tenant_id,
            Err(reason) => {
                log::warn!("⚠️ No tenant available from identity token: {}", reason);
                return Ok(TokenResponse::NoTenant(reason));
            }
        };

        let token_url = self.endpoints.token_url(&tenant_id);
        log::debug!("Token endpoint for tenant {}: {}", tenant_id, token_url);

        let assertion = self.assertion_builder.build(&token_url)?;
        log::debug!(
            "Client assertion {} valid until {}",
            assertion.claims().jti, assertion.claims().exp
        );

        let form = [
            ("resource", resource),
            ("client_id", self.credential.client_id()),
            ("client_assertion_type", CLIENT_ASSERTION_TYPE),
            ("client_assertion", assertion.as_str()),
            ("grant_type", GRANT_TYPE),
            ("redirect_uri", redirect_uri),
        ];

        let response = self.transport.post_form(&token_url, &form).await.map_err(|e| {
            log::error!("❌ Token endpoint request failed for tenant {}: {}", tenant_id, e);
            ExchangeError::Transport(e)
        })?;

        let token_response = TokenResponse::from_body(response.status, &response.body)?;
        match &token_response {
            TokenResponse::Issued(token) => log::info!(
                "✅ Access token issued for tenant {} (HTTP {}, expires_in {:?})",
                tenant_id, response.status, token.expires_in
            ),
            TokenResponse::ProviderError(error) => log::error!(
                "❌ Token endpoint returned {} for tenant {} (HTTP {}): {}",
                error.error, tenant_id, response.status,
                error.error_description.as_deref().unwrap_or("")
            ),
            TokenResponse::Unrecognized { .. } => log::warn!(
                "⚠️ Token endpoint returned an unrecognized body for tenant {} (HTTP {})",
                tenant_id, response.status
            ),
            TokenResponse::NoTenant(_) => {}
        }

        Ok(token_response)
    }

    fn tenant_of(identity_token: &str) -> Result<String, NoTenantError> {
        let claims = id_token_decoder::decode(identity_token)?;

        if claims.tenant_id().is_none() {
            return Err(NoTenantError::MissingTenant);
        }

        claims
            .routable_tenant_id()
            .map(str::to_string)
            .ok_or(NoTenantError::InvalidTenant)
    }
}
