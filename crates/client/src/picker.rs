//! Универсальный пикер ссылочных полей
//!
//! Экранная форма открывает пикер для конкретного поля (руководитель,
//! устройство, смена, классификация), пользователь ищет по уже
//! загруженному набору подбора и выбирает ровно одну строку. Родительская
//! форма не меняется, пока выбор не подтверждён; отмена (Escape, клик по
//! подложке) закрывает пикер, ничего не отправляя.

use crate::shared::list_utils::contains_ci;

/// Базовый трейт для элементов, которые можно выбирать через пикер
pub trait PickerResult {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
}

/// Трейт для элементов, отображаемых таблицей "код + описание"
pub trait TableDisplayable: PickerResult {
    fn code(&self) -> String;
    fn description(&self) -> String;
}

/// Выбранное значение, передаваемое родительской форме
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub code: String,
    pub description: String,
}

/// Состояние пикера одного набора подбора
#[derive(Debug, Clone)]
pub struct ReferencePicker<T: TableDisplayable + Clone> {
    items: Vec<T>,
    term: String,
    field_target: Option<String>,
    selected_id: Option<String>,
    is_open: bool,
}

impl<T: TableDisplayable + Clone> ReferencePicker<T> {
    /// Набор подбора загружается целиком заранее и фильтруется в памяти
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            term: String::new(),
            field_target: None,
            selected_id: None,
            is_open: false,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Открыть пикер для заполнения указанного поля формы
    pub fn open(&mut self, field_target: &str) {
        self.open_with(field_target, None);
    }

    /// Открыть с предвыбранной строкой
    pub fn open_with(&mut self, field_target: &str, selected_id: Option<String>) {
        self.field_target = Some(field_target.to_string());
        self.selected_id = selected_id;
        self.term.clear();
        self.is_open = true;
    }

    /// Поиск пересчитывается на каждый ввод
    pub fn search(&mut self, term: &str) {
        self.term = term.to_string();
    }

    /// Видимые строки: подстрока без учёта регистра по коду и описанию
    pub fn visible(&self) -> Vec<T> {
        let term = self.term.trim();
        if term.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| contains_ci(&item.code(), term) || contains_ci(&item.description(), term))
            .cloned()
            .collect()
    }

    /// Подсветить строку (клик), не подтверждая выбор
    pub fn highlight(&mut self, id: &str) {
        if self.items.iter().any(|item| item.id() == id) {
            self.selected_id = Some(id.to_string());
        }
    }

    /// Подтвердить выбор строки: пикер закрывается, родителю уходит
    /// (целевое поле, код + описание). Несуществующий id — no-op,
    /// пикер остаётся открыт.
    pub fn select(&mut self, id: &str) -> Option<(String, Selection)> {
        if !self.is_open {
            return None;
        }
        let item = self.items.iter().find(|item| item.id() == id)?;
        let selection = Selection {
            code: item.code(),
            description: item.description(),
        };
        let target = self.field_target.clone().unwrap_or_default();
        self.close();
        Some((target, selection))
    }

    /// Подтвердить подсвеченную строку (двойной клик, Enter)
    pub fn confirm_highlighted(&mut self) -> Option<(String, Selection)> {
        let id = self.selected_id.clone()?;
        self.select(&id)
    }

    /// Закрыть без выбора; Escape и клик по подложке равнозначны
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.is_open = false;
        self.field_target = None;
        self.selected_id = None;
        self.term.clear();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn field_target(&self) -> Option<&str> {
        self.field_target.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }
}
