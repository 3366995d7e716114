pub mod config;
pub mod list_utils;
