pub mod aggregate;

pub use aggregate::{OvertimeRate, OvertimeRateId};
