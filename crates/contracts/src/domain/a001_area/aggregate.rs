use crate::domain::common::{BaseRecord, RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор участка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaId(pub Uuid);

impl AreaId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for AreaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AreaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Участок (производственная площадка, цех)
///
/// Код руководителя подставляется через пикер сотрудников; имя
/// денормализовано для отображения и поиска в списке.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    #[serde(flatten)]
    pub base: BaseRecord<AreaId>,

    #[serde(rename = "headEmployeeCode")]
    pub head_employee_code: String,

    #[serde(rename = "headEmployeeName")]
    pub head_employee_name: String,
}

impl Area {
    /// Создать новый участок для отправки на сервер
    pub fn new_for_insert(
        code: String,
        description: String,
        head_employee_code: String,
        head_employee_name: String,
    ) -> Self {
        Self {
            base: BaseRecord::new(AreaId::new_v4(), code, description),
            head_employee_code,
            head_employee_name,
        }
    }
}

impl ResourceRecord for Area {
    type Id = AreaId;

    fn id(&self) -> AreaId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn collection_name() -> &'static str {
        "area"
    }

    fn element_name() -> &'static str {
        "Участок"
    }

    fn list_name() -> &'static str {
        "Участки"
    }
}
