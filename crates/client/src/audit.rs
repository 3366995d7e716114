//! Журнал доступа: best-effort, никогда не блокирует операцию

use crate::gateway::ApiGateway;
use async_trait::async_trait;
use contracts::audit::AuditEntry;
use std::sync::Arc;

/// Приёмник записей журнала доступа
///
/// Реализация обязана проглатывать собственные сбои: успешная мутация
/// не откатывается и не задерживается из-за журнала.
#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn log(&self, entry: AuditEntry);
}

/// Пишет журнал в REST-эндпоинт бэкенда
pub struct HttpAuditLogger {
    gateway: Arc<dyn ApiGateway>,
    endpoint: String,
    operator: String,
}

impl HttpAuditLogger {
    pub fn new(gateway: Arc<dyn ApiGateway>, operator: impl Into<String>) -> Self {
        Self {
            gateway,
            endpoint: "/api/audit-log".to_string(),
            operator: operator.into(),
        }
    }
}

#[async_trait]
impl AuditLogger for HttpAuditLogger {
    async fn log(&self, mut entry: AuditEntry) {
        if entry.messages.is_empty() {
            entry.messages = self.operator.clone();
        }
        let body = match serde_json::to_value(&entry) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("audit entry serialization failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.gateway.post_json(&self.endpoint, &body).await {
            // Сбой журнала — только в диагностику
            tracing::warn!("audit log write failed: {}", e);
        }
    }
}

/// Заглушка для встраиваний без журнала
pub struct NoopAuditLogger;

#[async_trait]
impl AuditLogger for NoopAuditLogger {
    async fn log(&self, _entry: AuditEntry) {}
}
