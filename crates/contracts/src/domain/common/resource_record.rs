use super::RecordId;
use serde::{de::DeserializeOwned, Serialize};

/// Трейт для записей справочников, управляемых экранами настроек
///
/// Определяет обязательные методы и метаданные для всех справочников
/// системы. Клиентский движок списков полностью обобщён над этим
/// трейтом.
pub trait ResourceRecord:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Тип идентификатора записи
    type Id: RecordId + Send + Sync;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Имя коллекции для REST-эндпоинта (например, "area")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Участок")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Участки")
    fn list_name() -> &'static str;

    /// Максимальная длина бизнес-кода
    fn code_max_len() -> usize {
        10
    }

    /// REST-эндпоинт коллекции (например, "/api/area")
    fn endpoint() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
