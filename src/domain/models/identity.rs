//! Azure AD가 admin consent 콜백으로 전달하는 ID 토큰의 클레임

use serde_json::{Map, Value};

/// 디코딩된 ID 토큰 클레임
///
/// 프로바이더가 발급한 임의의 클레임을 그대로 보관합니다.
/// 테넌트 탐색에는 `tid` 클레임만 사용합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityTokenClaims(Map<String, Value>);

impl IdentityTokenClaims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// 테넌트 ID (`tid`)
    ///
    /// 클레임이 없거나, 문자열이 아니거나, 빈 문자열이면 `None`입니다.
    pub fn tenant_id(&self) -> Option<&str> {
        self.get("tid")
            .and_then(Value::as_str)
            .filter(|tid| !tid.trim().is_empty())
    }

    /// 토큰 엔드포인트 경로에 넣을 수 있는 테넌트 ID
    ///
    /// ID 토큰의 서명은 검증하지 않으므로 `tid`는 GUID 또는 도메인 형태
    /// (`[A-Za-z0-9.-]`, `.`로 시작하지 않음)만 허용합니다.
    pub fn routable_tenant_id(&self) -> Option<&str> {
        self.tenant_id().filter(|tid| is_routable_tenant_id(tid))
    }

    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.0.get(claim)
    }
}

fn is_routable_tenant_id(tid: &str) -> bool {
    !tid.starts_with('.')
        && tid.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}
