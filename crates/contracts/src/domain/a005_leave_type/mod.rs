pub mod aggregate;

pub use aggregate::{LeaveType, LeaveTypeId};
