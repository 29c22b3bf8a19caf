//! 인증 관련 서비스 모듈
//!
//! Azure AD 클라이언트 자격 증명(app-only) 플로우의 토큰 획득 파이프라인입니다.
//!
//! # Features
//!
//! - Admin consent authorize URL 생성
//! - ID 토큰 디코딩 및 테넌트 탐색
//! - RS256 클라이언트 어설션 생성 및 서명
//! - 테넌트별 토큰 엔드포인트 교환
//!
//! # Security
//!
//! - 개인 키는 시작 시 한 번 로딩되어 불변으로 보관
//! - 어설션은 교환마다 새 `jti`와 짧은 유효 기간으로 생성
//! - 개인 키, 어설션, 액세스 토큰은 로그에 남기지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{ClientCredentialService, RsaSigner};
//!
//! let signer = Arc::new(RsaSigner::from_file(credential.certificate_path())?);
//! let service = ClientCredentialService::with_client(credential, signer, endpoints, client);
//!
//! let consent = service.authorization_url(&redirect_uri, &resource);
//! let response = service.exchange_token(&id_token, &redirect_uri, &resource).await?;
//! ```

pub mod authorization_url;
pub mod client_assertion;
pub mod id_token_decoder;
pub mod rsa_signer;
pub mod token_exchange;

pub use authorization_url::*;
pub use client_assertion::*;
pub use rsa_signer::*;
pub use token_exchange::*;
