//! Контроллер списка справочника
//!
//! Владеет кэшем коллекции одного справочника, окном поиска/постранки
//! и жизненным циклом мутаций. Кэш — зеркало сервера: после каждой
//! успешной мутации полностью перечитывается (resync), а при сбое
//! чтения остаётся прежним — устаревшие данные лучше пустого экрана.

use crate::audit::AuditLogger;
use crate::gateway::{parse_list, ApiGateway};
use crate::permissions::{Capability, PermissionSet};
use crate::shared::list_utils::{
    clamp_page, filter_list, page_window, sort_list, total_pages, Searchable, Sortable,
};
use crate::validate::{is_duplicate, validate_code, ValidationError};
use async_trait::async_trait;
use contracts::audit::{AccessType, AuditEntry};
use contracts::domain::common::{RecordId, ResourceRecord};
use std::sync::Arc;

/// Диалог подтверждения удаления (внешний коллаборатор)
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Подтверждение без вопросов — для встраиваний без диалога
pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmDialog for AlwaysConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Состояние мутации контроллера
///
/// Одновременно в полёте может быть только одна мутация; пока
/// состояние не `Idle`, кнопки отправки на экране должны быть
/// выключены.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Resyncing,
}

pub struct ResourceListController<R: ResourceRecord + Searchable + Sortable> {
    gateway: Arc<dyn ApiGateway>,
    audit: Arc<dyn AuditLogger>,
    confirm: Arc<dyn ConfirmDialog>,
    permissions: PermissionSet,

    items: Vec<R>,
    filter: String,
    sort_field: String,
    sort_ascending: bool,
    page: usize,
    page_size: usize,

    state: MutationState,
    last_error: Option<String>,
    is_loaded: bool,
}

impl<R: ResourceRecord + Searchable + Sortable> ResourceListController<R> {
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        audit: Arc<dyn AuditLogger>,
        confirm: Arc<dyn ConfirmDialog>,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            gateway,
            audit,
            confirm,
            permissions,
            items: Vec::new(),
            filter: String::new(),
            sort_field: "code".to_string(),
            sort_ascending: true,
            page: 1,
            page_size: 10,
            state: MutationState::Idle,
            last_error: None,
            is_loaded: false,
        }
    }

    // ------------------------------------------------------------------
    // Чтение
    // ------------------------------------------------------------------

    /// Полная перечитка коллекции с сервера
    ///
    /// При сбое кэш не трогается: экран показывает прежние данные и
    /// текст ошибки.
    pub async fn fetch_all(&mut self) -> Result<(), String> {
        let gateway = self.gateway.clone();
        let fetched = gateway
            .get_json(&R::endpoint())
            .await
            .and_then(parse_list::<R>);
        match fetched {
            Ok(items) => {
                self.items = items;
                self.is_loaded = true;
                self.last_error = None;
                self.page = clamp_page(self.page, self.total_pages());
                Ok(())
            }
            Err(e) => {
                let msg = e.user_message();
                self.last_error = Some(msg.clone());
                Err(msg)
            }
        }
    }

    /// Кэш, отфильтрованный и отсортированный для экрана
    pub fn filtered(&self) -> Vec<R> {
        let mut out = filter_list(self.items.clone(), &self.filter);
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }

    /// Срез текущей страницы
    pub fn page_items(&self) -> Vec<R> {
        page_window(&self.filtered(), self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    // ------------------------------------------------------------------
    // Окно поиска/постранки
    // ------------------------------------------------------------------

    /// Смена фильтра всегда возвращает на первую страницу
    pub fn set_filter(&mut self, q: impl Into<String>) {
        self.filter = q.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = clamp_page(self.page, self.total_pages());
    }

    /// Клик по заголовку: повторный клик по тому же полю меняет направление
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    // ------------------------------------------------------------------
    // Мутации
    // ------------------------------------------------------------------

    /// Локальная проверка формы; при провале сетевой вызов не делается
    pub fn validate_for_submit(&self, form: &R, is_edit: bool) -> Result<(), ValidationError> {
        validate_code(form.code(), R::code_max_len())?;
        let exclude = if is_edit {
            let id = form.id();
            self.items.iter().position(|r| r.id() == id)
        } else {
            None
        };
        if is_duplicate(
            form.code(),
            &self.items,
            |r: &R| r.code().to_string(),
            exclude,
        ) {
            return Err(ValidationError::DuplicateCode);
        }
        Ok(())
    }

    pub async fn submit_create(&mut self, form: R) -> Result<(), String> {
        if self.state != MutationState::Idle {
            return Err("Операция уже выполняется".to_string());
        }
        if !self.permissions.has(Capability::Add) {
            return Err("Недостаточно прав".to_string());
        }
        self.validate_for_submit(&form, false)
            .map_err(|e| e.to_string())?;

        let gateway = self.gateway.clone();
        self.state = MutationState::Submitting;
        let body = match serde_json::to_value(&form) {
            Ok(v) => v,
            Err(e) => {
                self.state = MutationState::Idle;
                return Err(e.to_string());
            }
        };
        let created = match gateway.post_json(&R::endpoint(), &body).await {
            // сервер мог дополнить запись (createdAt и т.п.)
            Ok(value) => serde_json::from_value::<R>(value).unwrap_or_else(|_| form.clone()),
            Err(e) => {
                let msg = e.user_message();
                self.state = MutationState::Idle;
                self.last_error = Some(msg.clone());
                return Err(msg);
            }
        };

        self.log_audit(AccessType::Add, &created).await;

        self.state = MutationState::Resyncing;
        if self.fetch_all().await.is_err() {
            // Создание прошло: кэш не должен потерять заведомо
            // существующую запись, даже если перечитка упала
            let id = created.id();
            if !self.items.iter().any(|r| r.id() == id) {
                self.items.push(created);
            }
        }
        self.state = MutationState::Idle;
        Ok(())
    }

    pub async fn submit_edit(&mut self, form: R) -> Result<(), String> {
        if self.state != MutationState::Idle {
            return Err("Операция уже выполняется".to_string());
        }
        if !self.permissions.has(Capability::Edit) {
            return Err("Недостаточно прав".to_string());
        }
        self.validate_for_submit(&form, true)
            .map_err(|e| e.to_string())?;

        let gateway = self.gateway.clone();
        self.state = MutationState::Submitting;
        let body = match serde_json::to_value(&form) {
            Ok(v) => v,
            Err(e) => {
                self.state = MutationState::Idle;
                return Err(e.to_string());
            }
        };
        let path = format!(
            "{}/{}",
            R::endpoint(),
            urlencoding::encode(&form.id().as_string())
        );
        if let Err(e) = gateway.put_json(&path, &body).await {
            let msg = e.user_message();
            self.state = MutationState::Idle;
            self.last_error = Some(msg.clone());
            return Err(msg);
        }

        self.log_audit(AccessType::Edit, &form).await;

        self.state = MutationState::Resyncing;
        if self.fetch_all().await.is_err() {
            // Правка прошла: подменяем запись локально
            let id = form.id();
            if let Some(pos) = self.items.iter().position(|r| r.id() == id) {
                self.items[pos] = form;
            }
        }
        self.state = MutationState::Idle;
        Ok(())
    }

    /// Удаление с подтверждением; отказ пользователя — не ошибка
    pub async fn delete(&mut self, id: R::Id) -> Result<(), String> {
        if self.state != MutationState::Idle {
            return Err("Операция уже выполняется".to_string());
        }
        if !self.permissions.has(Capability::Delete) {
            return Err("Недостаточно прав".to_string());
        }
        let Some(record) = self.items.iter().find(|r| r.id() == id).cloned() else {
            return Err("Запись не найдена".to_string());
        };

        let message = format!("Удалить {} [{}]?", R::element_name(), record.code());
        if !self.confirm.confirm(&message).await {
            return Ok(());
        }

        let gateway = self.gateway.clone();
        self.state = MutationState::Submitting;
        let path = format!(
            "{}/{}",
            R::endpoint(),
            urlencoding::encode(&id.as_string())
        );
        if let Err(e) = gateway.delete(&path).await {
            let msg = e.user_message();
            self.state = MutationState::Idle;
            self.last_error = Some(msg.clone());
            return Err(msg);
        }

        self.log_audit(AccessType::Delete, &record).await;

        self.state = MutationState::Resyncing;
        if self.fetch_all().await.is_err() {
            self.items.retain(|r| r.id() != id);
            self.page = clamp_page(self.page, self.total_pages());
        }
        self.state = MutationState::Idle;
        Ok(())
    }

    async fn log_audit(&self, access: AccessType, record: &R) {
        let trans = format!(
            "{} {} [{}] {}",
            access.as_str(),
            R::element_name(),
            record.code(),
            record.description()
        );
        self.audit
            .log(AuditEntry::new(access, trans, R::collection_name()))
            .await;
    }

    // ------------------------------------------------------------------
    // Доступ к состоянию
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> MutationState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state != MutationState::Idle
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
