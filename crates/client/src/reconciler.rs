//! Согласование матрицы активации с удалённой join-таблицей
//!
//! Флажок строки — это существование записи членства на сервере.
//! Инвариант кэша: `is_checked == membership_id.is_some()` у любой
//! строки в покое; пара меняется только атомарно, через
//! [`ToggleRow::set_membership`]. Сетевые операции независимы и могут
//! падать по отдельности, поэтому после сбоев состояние выправляется
//! перечиткой полного набора членств.

use crate::audit::AuditLogger;
use crate::gateway::{parse_list, ApiError, ApiGateway};
use crate::permissions::{Capability, PermissionSet};
use crate::shared::list_utils::{filter_list, page_window, total_pages, Searchable};
use contracts::audit::{AccessType, AuditEntry};
use contracts::domain::common::{MembershipRecord, ResourceRecord};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

/// Строка матрицы: запись справочника плюс её членство
#[derive(Debug, Clone)]
pub struct ToggleRow<R: ResourceRecord> {
    pub record: R,
    is_checked: bool,
    membership_id: Option<Uuid>,
}

impl<R: ResourceRecord> ToggleRow<R> {
    fn new(record: R) -> Self {
        Self {
            record,
            is_checked: false,
            membership_id: None,
        }
    }

    /// Пара (is_checked, membership_id) меняется только здесь
    fn set_membership(&mut self, id: Option<Uuid>) {
        self.membership_id = id;
        self.is_checked = id.is_some();
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub fn membership_id(&self) -> Option<Uuid> {
        self.membership_id
    }
}

impl<R: ResourceRecord + Searchable> Searchable for ToggleRow<R> {
    fn matches_filter(&self, filter: &str) -> bool {
        self.record.matches_filter(filter)
    }
}

pub struct BulkToggleReconciler<R, M>
where
    R: ResourceRecord + Searchable,
    M: MembershipRecord,
{
    gateway: Arc<dyn ApiGateway>,
    audit: Arc<dyn AuditLogger>,
    permissions: PermissionSet,

    rows: Vec<ToggleRow<R>>,
    filter: String,
    page: usize,
    page_size: usize,

    processing: bool,
    last_error: Option<String>,

    _membership: PhantomData<M>,
}

impl<R, M> BulkToggleReconciler<R, M>
where
    R: ResourceRecord + Searchable,
    M: MembershipRecord,
{
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        audit: Arc<dyn AuditLogger>,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            gateway,
            audit,
            permissions,
            rows: Vec::new(),
            filter: String::new(),
            page: 1,
            page_size: 10,
            processing: false,
            last_error: None,
            _membership: PhantomData,
        }
    }

    // ------------------------------------------------------------------
    // Загрузка
    // ------------------------------------------------------------------

    /// Загрузить каталог ресурсов и наложить на него набор членств
    pub async fn fetch_all(&mut self) -> Result<(), String> {
        let gateway = self.gateway.clone();
        match gateway
            .get_json(&R::endpoint())
            .await
            .and_then(parse_list::<R>)
        {
            Ok(records) => {
                self.rows = records.into_iter().map(ToggleRow::new).collect();
            }
            Err(e) => {
                let msg = e.user_message();
                self.last_error = Some(msg.clone());
                return Err(msg);
            }
        }
        self.refresh_memberships().await
    }

    /// Перечитать набор членств и перенастроить пары всех строк
    pub async fn refresh_memberships(&mut self) -> Result<(), String> {
        match self.load_memberships().await {
            Ok(memberships) => {
                self.apply_memberships(&memberships);
                Ok(())
            }
            Err(e) => {
                let msg = e.user_message();
                self.last_error = Some(msg.clone());
                Err(msg)
            }
        }
    }

    async fn load_memberships(&self) -> Result<Vec<M>, ApiError> {
        let gateway = self.gateway.clone();
        gateway
            .get_json(&M::endpoint())
            .await
            .and_then(parse_list::<M>)
    }

    fn apply_memberships(&mut self, memberships: &[M]) {
        for row in &mut self.rows {
            let found = memberships
                .iter()
                .find(|m| Self::same_code(m.member_code(), row.record.code()));
            row.set_membership(found.map(|m| m.id()));
        }
    }

    // ------------------------------------------------------------------
    // Переключение
    // ------------------------------------------------------------------

    /// Переключить одну строку по её бизнес-коду
    ///
    /// Пока идёт другая операция, повторный вызов игнорируется —
    /// очереди нет.
    pub async fn toggle_one(&mut self, code: &str) -> Result<(), String> {
        if self.processing {
            return Ok(());
        }
        if !self.permissions.has(Capability::Edit) {
            return Err("Недостаточно прав".to_string());
        }
        if self.position_of(code).is_none() {
            return Ok(());
        }

        self.processing = true;
        let result = self.flip_row(code).await;
        self.processing = false;

        if let Err(msg) = &result {
            self.last_error = Some(msg.clone());
            // сервер мог разойтись с кэшем: выправляемся перечиткой,
            // исходная ошибка сохраняется
            if let Ok(memberships) = self.load_memberships().await {
                self.apply_memberships(&memberships);
            }
        }
        result
    }

    /// Переключить все строки текущей страницы
    ///
    /// Если отмечены все строки — снимаем все; иначе доотмечаем
    /// неотмеченные. Операции идут строго последовательно: порядок
    /// журнала доступа детерминирован, нагрузка на сервер ограничена.
    /// Сбой одной строки не прерывает проход (continue-on-error); после
    /// прохода ошибка показывается один раз, не по разу на строку.
    pub async fn toggle_all(&mut self, page_codes: &[String]) -> Result<(), String> {
        if self.processing {
            return Ok(());
        }
        if !self.permissions.has(Capability::Edit) {
            return Err("Недостаточно прав".to_string());
        }

        let target_checked = !self.all_checked(page_codes);
        // снапшот строк, которым нужна смена состояния
        let snapshot: Vec<String> = page_codes
            .iter()
            .filter(|code| {
                self.position_of(code)
                    .map(|pos| self.rows[pos].is_checked != target_checked)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        self.processing = true;
        let mut failures = 0usize;
        for code in &snapshot {
            if let Err(e) = self.flip_row(code).await {
                tracing::error!("toggle failed for [{}]: {}", code, e);
                failures += 1;
            }
        }

        if target_checked {
            // финальная сверка: часть POST могла упасть или вернуть
            // другой id; при массовом снятии перечитка не нужна
            if let Ok(memberships) = self.load_memberships().await {
                self.apply_memberships(&memberships);
            }
        }
        self.processing = false;

        if failures > 0 {
            let msg = format!("Не удалось переключить строк: {}", failures);
            self.last_error = Some(msg.clone());
            Err(msg)
        } else {
            Ok(())
        }
    }

    async fn flip_row(&mut self, code: &str) -> Result<(), String> {
        let gateway = self.gateway.clone();
        let Some(pos) = self.position_of(code) else {
            return Ok(());
        };
        let row = self.rows[pos].clone();

        if row.is_checked {
            let Some(membership_id) = row.membership_id else {
                // пара рассогласована: лечится перечиткой в вызывающем
                return Err("Состояние строки устарело".to_string());
            };
            let path = format!("{}/{}", M::endpoint(), membership_id);
            gateway.delete(&path).await.map_err(|e| e.user_message())?;
            // строку ищем по коду заново: список могли пересортировать
            if let Some(pos) = self.position_of(code) {
                self.rows[pos].set_membership(None);
            }
            self.log_audit(AccessType::Delete, &row.record).await;
        } else {
            let body = M::insert_body(row.record.code());
            let value = gateway
                .post_json(&M::endpoint(), &body)
                .await
                .map_err(|e| e.user_message())?;
            let membership: M = serde_json::from_value(value)
                .map_err(|e| format!("Некорректный ответ сервера: {}", e))?;
            if let Some(pos) = self.position_of(code) {
                self.rows[pos].set_membership(Some(membership.id()));
            }
            self.log_audit(AccessType::Add, &row.record).await;
        }
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
            .log(AuditEntry::new(access, trans, M::collection_name()))
            .await;
    }

    // ------------------------------------------------------------------
    // Производное состояние
    // ------------------------------------------------------------------

    /// Флажок "выбрать все" не хранится: он истинен тогда и только
    /// тогда, когда отмечена каждая строка текущей страницы
    pub fn all_checked(&self, page_codes: &[String]) -> bool {
        !page_codes.is_empty()
            && page_codes.iter().all(|code| {
                self.position_of(code)
                    .map(|pos| self.rows[pos].is_checked)
                    .unwrap_or(false)
            })
    }

    pub fn rows(&self) -> &[ToggleRow<R>] {
        &self.rows
    }

    pub fn row(&self, code: &str) -> Option<&ToggleRow<R>> {
        self.position_of(code).map(|pos| &self.rows[pos])
    }

    pub fn set_filter(&mut self, q: impl Into<String>) {
        self.filter = q.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        let total = total_pages(self.filtered_rows().len(), self.page_size);
        self.page = page.max(1).min(total);
    }

    pub fn page_rows(&self) -> Vec<ToggleRow<R>> {
        page_window(&self.filtered_rows(), self.page, self.page_size)
    }

    /// Коды строк текущей страницы — аргумент для [`Self::toggle_all`]
    pub fn page_codes(&self) -> Vec<String> {
        self.page_rows()
            .iter()
            .map(|row| row.record.code().to_string())
            .collect()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    fn filtered_rows(&self) -> Vec<ToggleRow<R>> {
        filter_list(self.rows.clone(), &self.filter)
    }

    fn position_of(&self, code: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| Self::same_code(row.record.code(), code))
    }

    fn same_code(a: &str, b: &str) -> bool {
        a.trim().to_lowercase() == b.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockGateway, RecordingAudit};
    use contracts::domain::a006_device_type::{DeviceType, DeviceTypeActivation};
    use serde_json::json;

    fn device_type_json(code: &str, description: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "code": code,
            "description": description,
        })
    }

    fn matrix(
        gateway: Arc<MockGateway>,
        audit: Arc<RecordingAudit>,
    ) -> BulkToggleReconciler<DeviceType, DeviceTypeActivation> {
        BulkToggleReconciler::new(gateway, audit, PermissionSet::allow_all())
    }

    fn seeded_gateway(codes: &[&str]) -> Arc<MockGateway> {
        let gateway = Arc::new(MockGateway::default());
        gateway.seed(
            "/api/device-type",
            codes
                .iter()
                .map(|c| device_type_json(c, &format!("Устройство {}", c)))
                .collect(),
        );
        gateway.seed("/api/device-type2", Vec::new());
        gateway
    }

    fn assert_pair_invariant(rows: &[ToggleRow<DeviceType>]) {
        for row in rows {
            assert_eq!(
                row.is_checked(),
                row.membership_id().is_some(),
                "пара рассогласована у [{}]",
                row.record.base.code
            );
        }
    }

    #[tokio::test]
    async fn test_toggle_one_checks_then_unchecks() {
        let gateway = seeded_gateway(&["TRM", "GATE"]);
        let audit = Arc::new(RecordingAudit::default());
        let mut m = matrix(gateway.clone(), audit.clone());
        m.fetch_all().await.unwrap();

        m.toggle_one("TRM").await.unwrap();
        let row = m.row("TRM").unwrap();
        assert!(row.is_checked());
        assert!(row.membership_id().is_some());
        assert_eq!(gateway.records("/api/device-type2").len(), 1);

        m.toggle_one("TRM").await.unwrap();
        let row = m.row("TRM").unwrap();
        assert!(!row.is_checked());
        assert!(row.membership_id().is_none());
        assert_eq!(gateway.records("/api/device-type2").len(), 0);

        assert_pair_invariant(m.rows());
        let entries = audit.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].access_type, AccessType::Add);
        assert_eq!(entries[1].access_type, AccessType::Delete);
    }

    #[tokio::test]
    async fn test_toggle_one_failure_resyncs_from_server() {
        let gateway = seeded_gateway(&["TRM"]);
        let audit = Arc::new(RecordingAudit::default());
        let mut m = matrix(gateway.clone(), audit);
        m.fetch_all().await.unwrap();

        gateway.fail_post_when("/api/device-type2", "TRM");
        assert!(m.toggle_one("TRM").await.is_err());

        // состояние не сдвинулось, ошибка видна, пара цела
        let row = m.row("TRM").unwrap();
        assert!(!row.is_checked());
        assert!(m.last_error().is_some());
        assert_pair_invariant(m.rows());
    }

    #[tokio::test]
    async fn test_bulk_check_with_one_failure() {
        let codes = ["D1", "D2", "D3", "D4", "D5"];
        let gateway = seeded_gateway(&codes);
        let audit = Arc::new(RecordingAudit::default());
        let mut m = matrix(gateway.clone(), audit);
        m.fetch_all().await.unwrap();

        gateway.fail_post_when("/api/device-type2", "D3");
        let page: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        let err = m.toggle_all(&page).await.unwrap_err();

        // одна ошибка на весь проход, не по разу на строку
        assert_eq!(m.last_error(), Some(err.as_str()));

        // 4 отмечены с серверными id, упавшая осталась снятой
        for code in ["D1", "D2", "D4", "D5"] {
            let row = m.row(code).unwrap();
            assert!(row.is_checked(), "[{}] должна быть отмечена", code);
            assert!(row.membership_id().is_some());
        }
        assert!(!m.row("D3").unwrap().is_checked());
        assert_eq!(gateway.records("/api/device-type2").len(), 4);
        assert_pair_invariant(m.rows());
    }

    #[tokio::test]
    async fn test_bulk_uncheck_keeps_failed_row_checked() {
        let codes = ["D1", "D2", "D3"];
        let gateway = seeded_gateway(&codes);
        let audit = Arc::new(RecordingAudit::default());
        let mut m = matrix(gateway.clone(), audit);
        m.fetch_all().await.unwrap();

        let page: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        m.toggle_all(&page).await.unwrap();
        assert!(m.all_checked(&page));

        // ломаем удаление одной записи членства
        let stuck_id = m.row("D2").unwrap().membership_id().unwrap();
        gateway.fail_delete(&format!("/api/device-type2/{}", stuck_id));

        assert!(m.toggle_all(&page).await.is_err());

        assert!(!m.row("D1").unwrap().is_checked());
        assert!(!m.row("D3").unwrap().is_checked());
        // упавшая строка осталась отмеченной со старым id
        let stuck = m.row("D2").unwrap();
        assert!(stuck.is_checked());
        assert_eq!(stuck.membership_id(), Some(stuck_id));
        assert_pair_invariant(m.rows());
    }

    #[tokio::test]
    async fn test_toggle_all_direction_unchecks_only_when_all_checked() {
        let codes = ["D1", "D2"];
        let gateway = seeded_gateway(&codes);
        let audit = Arc::new(RecordingAudit::default());
        let mut m = matrix(gateway, audit);
        m.fetch_all().await.unwrap();

        let page: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        m.toggle_one("D1").await.unwrap();
        assert!(!m.all_checked(&page));

        // частично отмеченная страница доотмечается, не снимается
        m.toggle_all(&page).await.unwrap();
        assert!(m.all_checked(&page));

        m.toggle_all(&page).await.unwrap();
        assert!(!m.all_checked(&page));
        assert_pair_invariant(m.rows());
    }

    #[tokio::test]
    async fn test_refresh_memberships_overwrites_local_state() {
        let gateway = seeded_gateway(&["TRM", "GATE"]);
        let membership_id = Uuid::new_v4();
        gateway.seed(
            "/api/device-type2",
            vec![json!({"id": membership_id.to_string(), "deviceTypeCode": "GATE"})],
        );
        let audit = Arc::new(RecordingAudit::default());
        let mut m = matrix(gateway, audit);
        m.fetch_all().await.unwrap();

        assert!(!m.row("TRM").unwrap().is_checked());
        let gate = m.row("GATE").unwrap();
        assert!(gate.is_checked());
        assert_eq!(gate.membership_id(), Some(membership_id));
    }

    #[tokio::test]
    async fn test_edit_capability_required() {
        let gateway = seeded_gateway(&["TRM"]);
        let audit = Arc::new(RecordingAudit::default());
        let mut m: BulkToggleReconciler<DeviceType, DeviceTypeActivation> =
            BulkToggleReconciler::new(gateway.clone(), audit, PermissionSet::new());
        m.fetch_all().await.unwrap();

        assert!(m.toggle_one("TRM").await.is_err());
        assert_eq!(gateway.records("/api/device-type2").len(), 0);
    }
}
