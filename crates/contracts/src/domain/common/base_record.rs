use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Базовая запись справочника с обязательными полями
///
/// Каждый экран настроек работает с записями этой формы: короткий
/// бизнес-код (уникален без учёта регистра) плюс описание.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRecord<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Бизнес-код записи (например, "A01", "OT-150")
    pub code: String,
    /// Описание/название записи
    pub description: String,
    /// Комментарий
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Момент создания записи на сервере
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl<Id> BaseRecord<Id> {
    /// Создать новую запись
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            created_at: None,
        }
    }
}
