//! Common types and traits for all setup-screen records

pub mod base_record;
pub mod membership_record;
pub mod record_id;
pub mod resource_record;

// Re-exports
pub use base_record::BaseRecord;
pub use membership_record::MembershipRecord;
pub use record_id::RecordId;
pub use resource_record::ResourceRecord;
