//! Набор прав текущего пользователя для экрана
//!
//! Права приходят снаружи уже расшифрованными (см. контракт
//! PermissionGate); движок их только читает. Отсутствующий ключ
//! трактуется как запрет.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Именованное право, управляющее действием на экране
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Add,
    Edit,
    Delete,
    View,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Add => "Add",
            Capability::Edit => "Edit",
            Capability::Delete => "Delete",
            Capability::View => "View",
        }
    }
}

/// Карта прав, внедряемая в контроллер при создании
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    flags: HashMap<String, bool>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags(flags: HashMap<String, bool>) -> Self {
        Self { flags }
    }

    /// Полный доступ — для тестов и служебных сценариев
    pub fn allow_all() -> Self {
        let mut set = Self::new();
        for cap in [
            Capability::Add,
            Capability::Edit,
            Capability::Delete,
            Capability::View,
        ] {
            set.grant(cap);
        }
        set
    }

    pub fn grant(&mut self, cap: Capability) {
        self.flags.insert(cap.as_str().to_string(), true);
    }

    pub fn revoke(&mut self, cap: Capability) {
        self.flags.insert(cap.as_str().to_string(), false);
    }

    /// Отсутствующий ключ — запрет (fail-closed)
    pub fn has(&self, cap: Capability) -> bool {
        self.flags.get(cap.as_str()).copied().unwrap_or(false)
    }
}
