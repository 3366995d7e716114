use crate::domain::common::{BaseRecord, RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор грейда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobLevelId(pub Uuid);

impl JobLevelId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for JobLevelId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(JobLevelId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Грейд (уровень должности)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobLevel {
    #[serde(flatten)]
    pub base: BaseRecord<JobLevelId>,

    /// Ранг внутри сетки грейдов, для сортировки
    pub rank: i32,
}

impl JobLevel {
    pub fn new_for_insert(code: String, description: String, rank: i32) -> Self {
        Self {
            base: BaseRecord::new(JobLevelId::new_v4(), code, description),
            rank,
        }
    }
}

impl ResourceRecord for JobLevel {
    type Id = JobLevelId;

    fn id(&self) -> JobLevelId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn collection_name() -> &'static str {
        "job-level"
    }

    fn element_name() -> &'static str {
        "Грейд"
    }

    fn list_name() -> &'static str {
        "Грейды"
    }
}
