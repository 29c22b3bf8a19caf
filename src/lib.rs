//! Azure AD 클라이언트 자격 증명(app-only) 메일 서비스
//!
//! 테넌트 관리자의 admin consent를 받아, RSA 개인 키로 서명한 JWT 클라이언트 어설션으로
//! 테넌트별 app-only 액세스 토큰을 발급받고 Outlook 메일 API를 호출하는 서비스입니다.
//!
//! # Features
//!
//! - **Admin consent**: 멀티 테넌트 authorize URL 생성
//! - **테넌트 탐색**: consent 콜백 ID 토큰의 `tid` 클레임 디코딩
//! - **클라이언트 어설션**: RS256 (RSASSA-PKCS1-v1_5 / SHA-256) 서명 JWT
//! - **토큰 교환**: `client_credentials` grant, 응답 본문 그대로 전달
//! - **메일 조회**: 사용자 메일함의 최근 메일 10건
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /clientcreds/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers, Views │ ← 폼 처리, Handlebars 렌더링, 쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 획득 파이프라인, 메일 API
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Azure AD/Outlook│ ← 외부 엔드포인트
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clientcred_mail_service::config::AzureAdEndpoints;
//! use clientcred_mail_service::domain::models::{ApplicationCredential, TokenResponse};
//! use clientcred_mail_service::services::auth::{ClientCredentialService, RsaSigner};
//!
//! let credential = Arc::new(ApplicationCredential::from_env()?);
//! let signer = Arc::new(RsaSigner::from_file(credential.certificate_path())?);
//! let service = ClientCredentialService::with_client(
//!     credential, signer, AzureAdEndpoints::default(), reqwest::Client::new(),
//! );
//!
//! if let TokenResponse::Issued(token) = service.exchange_token(&id_token, &redirect_uri, &resource).await? {
//!     println!("expires in {:?}s", token.expires_in);
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;
