//! Общие контракты между клиентом настроек и REST-бэкендом
//!
//! Содержит DTO всех справочников (участки, группы, грейды, ставки
//! сверхурочных, виды отпусков, типы устройств), строки подбора для
//! пикеров и контракт журнала доступа.

pub mod audit;
pub mod domain;
pub mod lookup;
