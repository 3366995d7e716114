pub mod aggregate;

pub use aggregate::{Group, GroupId};
