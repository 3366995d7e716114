use crate::domain::common::{BaseRecord, MembershipRecord, RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор типа устройства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceTypeId(pub Uuid);

impl DeviceTypeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for DeviceTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DeviceTypeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Тип устройства учёта рабочего времени (терминал, турникет, биометрия)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceType {
    #[serde(flatten)]
    pub base: BaseRecord<DeviceTypeId>,
}

impl DeviceType {
    pub fn new_for_insert(code: String, description: String) -> Self {
        Self {
            base: BaseRecord::new(DeviceTypeId::new_v4(), code, description),
        }
    }
}

impl ResourceRecord for DeviceType {
    type Id = DeviceTypeId;

    fn id(&self) -> DeviceTypeId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn collection_name() -> &'static str {
        "device-type"
    }

    fn element_name() -> &'static str {
        "Тип устройства"
    }

    fn list_name() -> &'static str {
        "Типы устройств"
    }
}

// ============================================================================
// Membership (активация типа устройства)
// ============================================================================

/// Запись активации типа устройства (join-таблица device-type2)
///
/// Наличие записи на сервере означает, что тип устройства включён в
/// матрице активации. ID выдаёт сервер при создании.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceTypeActivation {
    pub id: Uuid,

    #[serde(rename = "deviceTypeCode")]
    pub device_type_code: String,
}

impl MembershipRecord for DeviceTypeActivation {
    fn id(&self) -> Uuid {
        self.id
    }

    fn member_code(&self) -> &str {
        &self.device_type_code
    }

    fn collection_name() -> &'static str {
        "device-type2"
    }

    fn insert_body(member_code: &str) -> serde_json::Value {
        serde_json::json!({ "deviceTypeCode": member_code })
    }
}
