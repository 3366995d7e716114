//! Контракт журнала доступа
//!
//! Запись формируется клиентом после успешной мутации и отправляется
//! best-effort: сбой записи в журнал никогда не блокирует операцию.

use serde::{Deserialize, Serialize};

/// Тип доступа в журнале
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessType {
    Add,
    Edit,
    Delete,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Add => "Add",
            AccessType::Edit => "Edit",
            AccessType::Delete => "Delete",
        }
    }
}

/// Запись журнала доступа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    #[serde(rename = "accessType")]
    pub access_type: AccessType,

    /// Человеко-читаемая строка транзакции, например
    /// "Add Участок [A01] Основная площадка"
    pub trans: String,

    pub messages: String,

    #[serde(rename = "formName")]
    pub form_name: String,
}

impl AuditEntry {
    pub fn new(access_type: AccessType, trans: String, form_name: &str) -> Self {
        Self {
            access_type,
            trans,
            messages: String::new(),
            form_name: form_name.to_string(),
        }
    }
}
