pub mod aggregate;

pub use aggregate::{DeviceType, DeviceTypeActivation, DeviceTypeId};
