pub mod aggregate;

pub use aggregate::{JobLevel, JobLevelId};
