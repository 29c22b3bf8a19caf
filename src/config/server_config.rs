//! 서버 실행 환경 및 바인딩 설정

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 쿠키 Secure 플래그 없이 http 로컬 테스트 허용
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 액세스 토큰 쿠키에 `Secure` 플래그를 붙일지 여부
    pub fn secure_cookies(&self) -> bool {
        !matches!(self, Environment::Development | Environment::Test)
    }
}

/// `PROFILE` 값에 해당하는 환경 파일
///
/// `dev` → `.env.dev`, `prod` → `.env.prod`, 그 외 또는 미설정 → `.env`
pub fn env_file_for_profile(profile: Option<&str>) -> &'static str {
    match profile.map(str::trim) {
        Some("dev") => ".env.dev",
        Some("prod") => ".env.prod",
        _ => ".env",
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    ///
    /// admin consent redirect URI가 요청의 호스트로 만들어지므로
    /// Azure AD 앱 등록의 회신 URL과 일치하는 주소로 접속해야 합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { per_second: 100, burst_size: 200 }
    }
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE`를 읽습니다.
    ///
    /// 값이 잘못되면 에러를 기록하고 기본값(100, 200)을 사용합니다.
    ///
    /// ```bash
    /// # .env.dev
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let per_second = match var("RATE_LIMIT_PER_SECOND").map(|v| v.trim().parse::<u64>()) {
            Some(Ok(value)) if value > 0 => value,
            None => defaults.per_second,
            Some(_) => {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패. 기본값 {} 사용", defaults.per_second);
                defaults.per_second
            }
        };

        let burst_size = match var("RATE_LIMIT_BURST_SIZE").map(|v| v.trim().parse::<u32>()) {
            Some(Ok(value)) if value > 0 => value,
            None => defaults.burst_size,
            Some(_) => {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 {} 사용", defaults.burst_size);
                defaults.burst_size
            }
        };

        Self { per_second, burst_size }
    }
}
