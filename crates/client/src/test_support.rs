//! Общие заглушки для тестов движка
//!
//! MockGateway держит коллекции в памяти и ведёт себя как REST-бэкенд:
//! GET отдаёт массив, POST дописывает запись и возвращает её с id,
//! PUT заменяет по id из пути, DELETE удаляет по id из пути.

use crate::audit::AuditLogger;
use crate::controller::ConfirmDialog;
use crate::gateway::{ApiError, ApiGateway};
use async_trait::async_trait;
use contracts::audit::AuditEntry;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct MockState {
    collections: HashMap<String, Vec<Value>>,
    fail_get: HashSet<String>,
    fail_delete: HashSet<String>,
    fail_post_when: Vec<(String, String)>,
}

#[derive(Default)]
pub(crate) struct MockGateway {
    state: Mutex<MockState>,
}

impl MockGateway {
    pub(crate) fn seed(&self, path: &str, records: Vec<Value>) {
        let mut state = self.state.lock().unwrap();
        state.collections.insert(path.to_string(), records);
    }

    /// Все GET по этому пути начинают падать
    pub(crate) fn fail_get(&self, path: &str) {
        self.state.lock().unwrap().fail_get.insert(path.to_string());
    }

    /// POST по пути падает, если сериализованное тело содержит подстроку
    pub(crate) fn fail_post_when(&self, path: &str, body_contains: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_post_when
            .push((path.to_string(), body_contains.to_string()));
    }

    /// DELETE по полному пути (с id) начинает падать
    pub(crate) fn fail_delete(&self, full_path: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_delete
            .insert(full_path.to_string());
    }

    /// Текущее содержимое коллекции, как его видит "сервер"
    pub(crate) fn records(&self, path: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }
}

fn split_element_path(path: &str) -> Result<(&str, &str), ApiError> {
    path.rsplit_once('/')
        .ok_or_else(|| ApiError::Transport(format!("нет id в пути: {}", path)))
}

#[async_trait]
impl ApiGateway for MockGateway {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let state = self.state.lock().unwrap();
        if state.fail_get.contains(path) {
            return Err(ApiError::Status {
                status: 500,
                message: "внутренняя ошибка сервера".to_string(),
            });
        }
        let records = state.collections.get(path).cloned().unwrap_or_default();
        Ok(Value::Array(records))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let mut state = self.state.lock().unwrap();
        let serialized = body.to_string();
        if state
            .fail_post_when
            .iter()
            .any(|(p, needle)| p == path && serialized.contains(needle))
        {
            return Err(ApiError::Status {
                status: 409,
                message: "Сервер отклонил запись".to_string(),
            });
        }
        let mut record = body.clone();
        if record.get("id").is_none() {
            if let Some(map) = record.as_object_mut() {
                map.insert("id".to_string(), json!(Uuid::new_v4().to_string()));
            }
        }
        state
            .collections
            .entry(path.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let (endpoint, id) = split_element_path(path)?;
        let mut state = self.state.lock().unwrap();
        let records = state.collections.entry(endpoint.to_string()).or_default();
        match records
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id))
        {
            Some(slot) => {
                *slot = body.clone();
                Ok(body.clone())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: format!("запись {} не найдена", id),
            }),
        }
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_delete.contains(path) {
            return Err(ApiError::Status {
                status: 500,
                message: "внутренняя ошибка сервера".to_string(),
            });
        }
        let (endpoint, id) = split_element_path(path)?;
        if let Some(records) = state.collections.get_mut(endpoint) {
            records.retain(|r| r.get("id").and_then(Value::as_str) != Some(id));
        }
        Ok(())
    }
}

/// Журнал, который просто копит записи для проверок
#[derive(Default)]
pub(crate) struct RecordingAudit {
    pub(crate) entries: Mutex<Vec<AuditEntry>>,
}

#[async_trait]
impl AuditLogger for RecordingAudit {
    async fn log(&self, entry: AuditEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

/// Диалог, который всегда отвечает "нет"
pub(crate) struct DenyConfirm;

#[async_trait]
impl ConfirmDialog for DenyConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        false
    }
}

pub(crate) fn area_json(code: &str, description: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "code": code,
        "description": description,
        "headEmployeeCode": "E100",
        "headEmployeeName": "Иванов И.И.",
    })
}

/// Шлюз с заполненным справочником участков; возвращает и исходные записи
pub(crate) fn seeded_area_gateway(
    records: &[(&str, &str)],
) -> (Arc<MockGateway>, Vec<Value>) {
    let seeded: Vec<Value> = records
        .iter()
        .map(|(code, description)| area_json(code, description))
        .collect();
    let gateway = Arc::new(MockGateway::default());
    gateway.seed("/api/area", seeded.clone());
    (gateway, seeded)
}
