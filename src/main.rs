//! 클라이언트 자격 증명 메일 서비스 메인 애플리케이션
//!
//! 설정과 개인 키를 로딩해 서비스를 구성하고 Actix-web HTTP 서버를 구동합니다.

use actix_web::middleware::{self, TrailingSlash};
use actix_web::{web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info};
use clientcred_mail_service::config::{env_file_for_profile, RateLimitConfig, ServerConfig};
use clientcred_mail_service::handlers::AppState;
use clientcred_mail_service::routes::{configure_all_routes, CLIENTCREDS_SCOPE};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 클라이언트 자격 증명 메일 서비스 시작중...");

    // 자격 증명, 개인 키, HTTP 클라이언트, 뷰 초기화
    let state = AppState::from_env().map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(state)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Admin consent: http://{}{}/", bind_address, CLIENTCREDS_SCOPE);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("invalid rate limit configuration"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            // 라우트가 끝 `/`를 포함하므로 중복 슬래시만 정리
            .wrap(middleware::NormalizePath::new(TrailingSlash::MergeOnly))
            .app_data(state.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").ok();
    let env_file = env_file_for_profile(profile.as_deref());

    match dotenv::from_filename(env_file) {
        Ok(_) => info!("{} 파일 로드 됨 (profile: {:?})", env_file, profile),
        Err(e) => error!("{} 파일 로드 실패: {}", env_file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=clientcred_mail_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
