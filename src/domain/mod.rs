//! # Domain Layer Module
//!
//! 클라이언트 자격 증명(app-only) 플로우의 도메인 타입을 담는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 자격 증명, ID 토큰 클레임, 클라이언트 어설션, 토큰 응답
//! └── DTOs    - 웹 계층 폼/뷰 데이터
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! External (Azure AD 토큰 엔드포인트, Outlook 메일 API)
//! ```
//!
//! ## 수명 주기
//!
//! | 타입 | 생성 시점 | 공유 |
//! |------|-----------|------|
//! | `ApplicationCredential` | 프로세스 시작 시 1회 | 모든 요청에서 읽기 전용 |
//! | `IdentityTokenClaims` | 콜백 요청마다 | 테넌트 탐색 후 폐기 |
//! | `ClientAssertion` | 토큰 교환마다 | 저장/재사용 안 함 |
//! | `TokenResponse` | 토큰 교환마다 | 소유권이 호출자에게 이동 |

pub mod dto;
pub mod models;
