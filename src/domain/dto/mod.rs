//! # Data Transfer Objects
//!
//! 웹 계층 경계에서 주고받는 폼/뷰 데이터입니다.
//!
//! ```text
//! dto/
//! ├── consent/
//! │   ├── request.rs   - Admin consent 콜백 폼
//! │   └── response.rs  - Admin consent URL
//! └── mail/
//!     ├── request.rs   - 메일함 조회 폼
//!     └── response.rs  - 메일 목록 행
//! ```

pub mod consent;
pub mod mail;
