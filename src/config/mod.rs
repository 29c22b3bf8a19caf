//! # Configuration Module
//!
//! 환경 변수 기반 설정을 시작 시 한 번 읽어 불변 값으로 만드는 모듈입니다.
//! 전역 상태 없이, 만들어진 값은 서비스 생성자로 주입됩니다.
//!
//! ## 모듈 구성
//!
//! - [`azure_config`] - 애플리케이션 자격 증명, Azure AD 엔드포인트, Outlook 메일 API
//! - [`http_config`] - 외부 호출용 HTTP 클라이언트
//! - [`server_config`] - 실행 환경, 서버 바인딩
//!
//! ## 프로파일
//!
//! `PROFILE=dev|prod`로 `.env.dev` / `.env.prod`를 선택하며, 없으면 `.env`를 읽습니다.
//!
//! ```bash
//! PROFILE=dev cargo run
//! ```

pub mod azure_config;
pub mod http_config;
pub mod server_config;

pub use azure_config::*;
pub use http_config::*;
pub use server_config::*;
