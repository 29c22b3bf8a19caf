//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`base64url`] - compact 토큰 세그먼트 인코딩/디코딩 (패딩 복원 포함)
//! - [`string_utils`] - 폼 입력 정리, 관대한 숫자 역직렬화

pub mod base64url;
pub mod string_utils;
