//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 설정 값으로 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//!
//! - [`auth`] - Azure AD 클라이언트 자격 증명 토큰 획득
//! - [`mail`] - Outlook 메일 REST API 호출

pub mod auth;
pub mod mail;
