//! HTML 뷰 렌더링
//!
//! 바이너리에 포함된 Handlebars 템플릿으로 페이지를 렌더링합니다.
//! `{{value}}` 출력은 기본적으로 HTML 이스케이프됩니다.

use handlebars::Handlebars;
use serde_json::json;

use crate::domain::dto::mail::MessageSummary;
use crate::errors::{AppError, ConfigError};

/// 페이지 렌더러
pub struct ViewRenderer {
    handlebars: Handlebars<'static>,
}

impl ViewRenderer {
    /// 모든 템플릿을 등록한 렌더러를 만듭니다.
    pub fn new() -> Result<Self, ConfigError> {
        let mut hb = Handlebars::new();

        let templates = [
            ("home", include_str!("templates/home.hbs")),
            ("mail", include_str!("templates/mail.hbs")),
            ("error", include_str!("templates/error.hbs")),
        ];

        for (name, source) in templates {
            hb.register_template_string(name, source).map_err(|e| {
                ConfigError::Template(format!("Failed to register {} template: {}", name, e))
            })?;
        }

        Ok(Self { handlebars: hb })
    }

    /// admin consent 링크가 있는 홈 페이지
    pub fn render_home(&self, consent_url: &str) -> Result<String, AppError> {
        self.render("home", &json!({ "consent_url": consent_url }))
    }

    /// 메일함 조회 폼과 메일 목록
    pub fn render_mail(
        &self,
        action: &str,
        user_email: &str,
        messages: &[MessageSummary],
    ) -> Result<String, AppError> {
        self.render(
            "mail",
            &json!({
                "action": action,
                "user_email": user_email,
                "messages": messages,
            }),
        )
    }

    /// `ERROR: {message}` 페이지
    pub fn render_error(&self, message: &str, home: &str) -> Result<String, AppError> {
        self.render("error", &json!({ "message": message, "home": home }))
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, AppError> {
        self.handlebars
            .render(name, context)
            .map_err(|e| AppError::InternalError(format!("Failed to render {} view: {}", name, e)))
    }
}
