//! Строки подбора для пикеров ссылочных полей
//!
//! Каждый набор подбора (сотрудники, устройства, смены, классификации)
//! мал и загружается целиком; фильтрация выполняется клиентом в памяти.

use serde::{Deserialize, Serialize};

/// Сотрудник для пикера руководителя
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeLookup {
    pub code: String,
    pub description: String,
    /// Подразделение, для отображения рядом с именем
    #[serde(default)]
    pub department: String,
}

/// Устройство учёта времени
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceLookup {
    pub code: String,
    pub description: String,
    #[serde(rename = "serialNumber", default)]
    pub serial_number: String,
}

/// Смена
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshiftLookup {
    pub code: String,
    pub description: String,
}

/// Классификация отпуска
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationLookup {
    pub code: String,
    pub description: String,
}
