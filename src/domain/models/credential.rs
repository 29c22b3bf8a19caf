//! 애플리케이션 자격 증명
//!
//! Azure AD에 등록된 애플리케이션을 식별하는 불변 설정 값입니다.
//! 시작 시 한 번 로딩되어 모든 요청이 읽기 전용으로 공유합니다.

use std::path::{Path, PathBuf};

/// 등록된 애플리케이션의 자격 증명
///
/// | 필드 | 설명 |
/// |------|------|
/// | `client_id` | Azure AD 애플리케이션(클라이언트) ID |
/// | `certificate_path` | PKCS#1 PEM 개인 키 파일 경로 |
/// | `certificate_thumbprint` | 공개 인증서 지문, 어설션 헤더 `x5t`로 전달 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCredential {
    client_id: String,
    certificate_path: PathBuf,
    certificate_thumbprint: String,
}

impl ApplicationCredential {
    pub fn new(
        client_id: impl Into<String>,
        certificate_path: impl Into<PathBuf>,
        certificate_thumbprint: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            certificate_path: certificate_path.into(),
            certificate_thumbprint: certificate_thumbprint.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn certificate_path(&self) -> &Path {
        &self.certificate_path
    }

    pub fn certificate_thumbprint(&self) -> &str {
        &self.certificate_thumbprint
    }
}
