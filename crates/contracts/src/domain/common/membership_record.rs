use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// Трейт для записей членства (join-таблица "ресурс активен")
///
/// Запись членства существует на сервере отдельно от самой записи
/// справочника: её наличие означает, что ресурс с `member_code`
/// сейчас включён. ID новой записи выдаёт сервер в ответе на POST.
pub trait MembershipRecord:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// ID записи членства (выдан сервером)
    fn id(&self) -> Uuid;

    /// Бизнес-код ресурса, к которому относится членство
    fn member_code(&self) -> &str;

    /// Имя коллекции для REST-эндпоинта (например, "device-type2")
    fn collection_name() -> &'static str;

    /// REST-эндпоинт коллекции
    fn endpoint() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Тело POST-запроса на создание членства (без ID — его выдаст сервер)
    fn insert_body(member_code: &str) -> serde_json::Value;
}
