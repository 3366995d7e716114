use crate::domain::common::{BaseRecord, RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор ставки сверхурочных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OvertimeRateId(pub Uuid);

impl OvertimeRateId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for OvertimeRateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OvertimeRateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Ставка сверхурочных
///
/// Привязана к смене: код смены выбирается через пикер, описание
/// денормализовано для списка.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRate {
    #[serde(flatten)]
    pub base: BaseRecord<OvertimeRateId>,

    /// Множитель к базовой часовой ставке (например, 1.5)
    pub multiplier: f64,

    #[serde(rename = "workshiftCode")]
    pub workshift_code: String,

    #[serde(rename = "workshiftName")]
    pub workshift_name: String,
}

impl OvertimeRate {
    pub fn new_for_insert(
        code: String,
        description: String,
        multiplier: f64,
        workshift_code: String,
        workshift_name: String,
    ) -> Self {
        Self {
            base: BaseRecord::new(OvertimeRateId::new_v4(), code, description),
            multiplier,
            workshift_code,
            workshift_name,
        }
    }
}

impl ResourceRecord for OvertimeRate {
    type Id = OvertimeRateId;

    fn id(&self) -> OvertimeRateId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn collection_name() -> &'static str {
        "overtime-rate"
    }

    fn element_name() -> &'static str {
        "Ставка сверхурочных"
    }

    fn list_name() -> &'static str {
        "Ставки сверхурочных"
    }
}
