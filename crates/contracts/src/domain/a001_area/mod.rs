pub mod aggregate;

pub use aggregate::{Area, AreaId};
