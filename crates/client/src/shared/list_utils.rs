/// Универсальные утилиты для работы со списками (поиск, сортировка, окно страницы)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Вхождение подстроки без учёта регистра
pub fn contains_ci(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Число страниц для отфильтрованного списка (минимум 1)
pub fn total_pages(filtered_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered_len.div_ceil(page_size).max(1)
}

/// Привести номер страницы (1-based) в диапазон [1, total_pages]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Срез текущей страницы; выход за диапазон прижимается, не паникует
pub fn page_window<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, total_pages(items.len(), page_size));
    let start = (page - 1) * page_size;
    items.iter().skip(start).take(page_size).cloned().collect()
}
