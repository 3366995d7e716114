//! Привязка экранов настроек к движку
//!
//! Здесь каждый экран объявляет, по каким полям его справочник ищется
//! и сортируется, как строки подбора показываются в пикере, и получает
//! готовый тип контроллера.

use crate::controller::ResourceListController;
use crate::picker::{PickerResult, ReferencePicker, TableDisplayable};
use crate::reconciler::BulkToggleReconciler;
use crate::shared::list_utils::{contains_ci, Searchable, Sortable};
use contracts::domain::a001_area::Area;
use contracts::domain::a002_group::Group;
use contracts::domain::a003_job_level::JobLevel;
use contracts::domain::a004_overtime_rate::OvertimeRate;
use contracts::domain::a005_leave_type::LeaveType;
use contracts::domain::a006_device_type::{DeviceType, DeviceTypeActivation};
use contracts::lookup::{ClassificationLookup, DeviceLookup, EmployeeLookup, WorkshiftLookup};
use std::cmp::Ordering;

// ============================================================================
// Экраны
// ============================================================================

pub type AreaScreen = ResourceListController<Area>;
pub type GroupScreen = ResourceListController<Group>;
pub type JobLevelScreen = ResourceListController<JobLevel>;
pub type OvertimeRateScreen = ResourceListController<OvertimeRate>;
pub type LeaveTypeScreen = ResourceListController<LeaveType>;
pub type DeviceTypeScreen = ResourceListController<DeviceType>;

/// Матрица активации типов устройств
pub type DeviceTypeMatrix = BulkToggleReconciler<DeviceType, DeviceTypeActivation>;

pub type EmployeePicker = ReferencePicker<EmployeeLookup>;
pub type DevicePicker = ReferencePicker<DeviceLookup>;
pub type WorkshiftPicker = ReferencePicker<WorkshiftLookup>;
pub type ClassificationPicker = ReferencePicker<ClassificationLookup>;

// ============================================================================
// Поиск и сортировка по экранам
// ============================================================================

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl Searchable for Area {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter)
            || contains_ci(&self.base.description, filter)
            || contains_ci(&self.head_employee_name, filter)
    }
}

impl Sortable for Area {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_ci(&self.base.description, &other.base.description),
            "headEmployeeName" => cmp_ci(&self.head_employee_name, &other.head_employee_name),
            _ => cmp_ci(&self.base.code, &other.base.code),
        }
    }
}

impl Searchable for Group {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter) || contains_ci(&self.base.description, filter)
    }
}

impl Sortable for Group {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_ci(&self.base.description, &other.base.description),
            _ => cmp_ci(&self.base.code, &other.base.code),
        }
    }
}

impl Searchable for JobLevel {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter) || contains_ci(&self.base.description, filter)
    }
}

impl Sortable for JobLevel {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_ci(&self.base.description, &other.base.description),
            "rank" => self.rank.cmp(&other.rank),
            _ => cmp_ci(&self.base.code, &other.base.code),
        }
    }
}

impl Searchable for OvertimeRate {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter)
            || contains_ci(&self.base.description, filter)
            || contains_ci(&self.workshift_name, filter)
    }
}

impl Sortable for OvertimeRate {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_ci(&self.base.description, &other.base.description),
            "multiplier" => self
                .multiplier
                .partial_cmp(&other.multiplier)
                .unwrap_or(Ordering::Equal),
            "workshiftName" => cmp_ci(&self.workshift_name, &other.workshift_name),
            _ => cmp_ci(&self.base.code, &other.base.code),
        }
    }
}

impl Searchable for LeaveType {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter)
            || contains_ci(&self.base.description, filter)
            || contains_ci(&self.classification_name, filter)
    }
}

impl Sortable for LeaveType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_ci(&self.base.description, &other.base.description),
            "classificationName" => {
                cmp_ci(&self.classification_name, &other.classification_name)
            }
            _ => cmp_ci(&self.base.code, &other.base.code),
        }
    }
}

impl Searchable for DeviceType {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter) || contains_ci(&self.base.description, filter)
    }
}

impl Sortable for DeviceType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_ci(&self.base.description, &other.base.description),
            _ => cmp_ci(&self.base.code, &other.base.code),
        }
    }
}

// ============================================================================
// Строки подбора в пикерах
// ============================================================================

impl PickerResult for EmployeeLookup {
    fn id(&self) -> String {
        self.code.clone()
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }
}

impl TableDisplayable for EmployeeLookup {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn description(&self) -> String {
        if self.department.is_empty() {
            self.description.clone()
        } else {
            format!("{} ({})", self.description, self.department)
        }
    }
}

impl PickerResult for DeviceLookup {
    fn id(&self) -> String {
        self.code.clone()
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }
}

impl TableDisplayable for DeviceLookup {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn description(&self) -> String {
        if self.serial_number.is_empty() {
            self.description.clone()
        } else {
            format!("{} (s/n {})", self.description, self.serial_number)
        }
    }
}

impl PickerResult for WorkshiftLookup {
    fn id(&self) -> String {
        self.code.clone()
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }
}

impl TableDisplayable for WorkshiftLookup {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

impl PickerResult for ClassificationLookup {
    fn id(&self) -> String {
        self.code.clone()
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }
}

impl TableDisplayable for ClassificationLookup {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}
