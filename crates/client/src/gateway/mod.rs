//! Шлюз к REST-бэкенду
//!
//! Контроллеры работают через трейт [`ApiGateway`]; боевая реализация —
//! [`http::HttpGateway`] поверх reqwest, в тестах — мок в памяти.

pub mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpGateway;

/// Ошибка обращения к бэкенду
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Сервер ответил не-2xx статусом
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// До сервера не достучались
    #[error("transport error: {0}")]
    Transport(String),

    /// Ответ пришёл, но тело не разобралось
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Сообщение для показа пользователю
    ///
    /// Для статусной ошибки — `{message}` из тела ответа, если сервер
    /// его прислал, иначе общий текст с кодом.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, message } => {
                if message.trim().is_empty() {
                    format!("Сервер ответил ошибкой (HTTP {})", status)
                } else {
                    message.clone()
                }
            }
            other => other.to_string(),
        }
    }
}

/// Транспорт к REST-бэкенду, общий для всех экранов
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

/// Достать `{message}` из тела ошибочного ответа, если оно там есть
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
}

/// Разобрать список записей из ответа сервера
///
/// Сервер отдаёт либо голый массив, либо конверт
/// `{data: [...], totalCount: n}` (два экрана с серверной постранкой);
/// обе формы нормализуются в полный список.
pub fn parse_list<R: DeserializeOwned>(value: Value) -> Result<Vec<R>, ApiError> {
    let payload = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove("data")
            .ok_or_else(|| ApiError::Decode("ожидался массив записей или поле data".to_string()))?,
        _ => {
            return Err(ApiError::Decode(
                "ожидался массив записей".to_string(),
            ))
        }
    };
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
