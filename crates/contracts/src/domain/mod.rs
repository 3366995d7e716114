pub mod common;

pub mod a001_area;
pub mod a002_group;
pub mod a003_job_level;
pub mod a004_overtime_rate;
pub mod a005_leave_type;
pub mod a006_device_type;
