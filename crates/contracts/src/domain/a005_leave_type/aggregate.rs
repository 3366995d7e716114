use crate::domain::common::{BaseRecord, RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор вида отпуска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveTypeId(pub Uuid);

impl LeaveTypeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for LeaveTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LeaveTypeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Вид отпуска
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveType {
    #[serde(flatten)]
    pub base: BaseRecord<LeaveTypeId>,

    #[serde(rename = "isPaid")]
    pub is_paid: bool,

    /// Максимум дней в году; None — без ограничения
    #[serde(rename = "maxDays", default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<i32>,

    #[serde(rename = "classificationCode")]
    pub classification_code: String,

    #[serde(rename = "classificationName")]
    pub classification_name: String,
}

impl LeaveType {
    pub fn new_for_insert(
        code: String,
        description: String,
        is_paid: bool,
        max_days: Option<i32>,
        classification_code: String,
        classification_name: String,
    ) -> Self {
        Self {
            base: BaseRecord::new(LeaveTypeId::new_v4(), code, description),
            is_paid,
            max_days,
            classification_code,
            classification_name,
        }
    }
}

impl ResourceRecord for LeaveType {
    type Id = LeaveTypeId;

    fn id(&self) -> LeaveTypeId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn collection_name() -> &'static str {
        "leave-type"
    }

    fn element_name() -> &'static str {
        "Вид отпуска"
    }

    fn list_name() -> &'static str {
        "Виды отпусков"
    }
}
