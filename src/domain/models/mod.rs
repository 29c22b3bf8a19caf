//! # Domain Models
//!
//! 클라이언트 자격 증명 플로우의 핵심 값 객체들입니다.
//!
//! - [`credential`] - 애플리케이션 자격 증명 (불변, 요청 간 공유)
//! - [`identity`] - 콜백 ID 토큰 클레임 (요청마다 생성, 테넌트 탐색 후 폐기)
//! - [`assertion`] - 서명된 클라이언트 어설션 (교환마다 새로 생성)
//! - [`token`] - 토큰 엔드포인트 응답

pub mod assertion;
pub mod credential;
pub mod identity;
pub mod token;

pub use assertion::*;
pub use credential::*;
pub use identity::*;
pub use token::*;
