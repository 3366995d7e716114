//! Локальная проверка формы перед отправкой на сервер
//!
//! Проверяется только то, что видно по кэшу: непустой код, длина,
//! дубликат без учёта регистра. Серверную уникальность это не
//! гарантирует — гонка двух клиентов всплывёт как обычный отказ
//! отправки.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Код не заполнен")]
    EmptyCode,

    #[error("Код длиннее {max} символов")]
    CodeTooLong { max: usize },

    #[error("Код уже используется")]
    DuplicateCode,
}

/// Проверить код на пустоту и длину
pub fn validate_code(code: &str, max_len: usize) -> Result<(), ValidationError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ValidationError::EmptyCode);
    }
    if code.chars().count() > max_len {
        return Err(ValidationError::CodeTooLong { max: max_len });
    }
    Ok(())
}

/// Есть ли в списке запись с таким же кодом (без учёта регистра)
///
/// При правке запись с индексом `exclude` пропускается, чтобы правка
/// без смены кода не конфликтовала сама с собой.
pub fn is_duplicate<T>(
    candidate: &str,
    items: &[T],
    key: impl Fn(&T) -> String,
    exclude: Option<usize>,
) -> bool {
    let candidate = candidate.trim().to_lowercase();
    items.iter().enumerate().any(|(idx, item)| {
        if exclude == Some(idx) {
            return false;
        }
        key(item).trim().to_lowercase() == candidate
    })
}
