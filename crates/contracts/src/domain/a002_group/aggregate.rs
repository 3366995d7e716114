use crate::domain::common::{BaseRecord, RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор группы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for GroupId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GroupId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Группа сотрудников (табельная группа)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(flatten)]
    pub base: BaseRecord<GroupId>,
}

impl Group {
    pub fn new_for_insert(code: String, description: String) -> Self {
        Self {
            base: BaseRecord::new(GroupId::new_v4(), code, description),
        }
    }
}

impl ResourceRecord for Group {
    type Id = GroupId;

    fn id(&self) -> GroupId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn collection_name() -> &'static str {
        "group"
    }

    fn element_name() -> &'static str {
        "Группа"
    }

    fn list_name() -> &'static str {
        "Группы"
    }
}
