pub mod mail_service;

pub use mail_service::*;
