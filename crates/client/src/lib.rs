//! Движок экранов настроек
//!
//! Каждый административный экран (участки, группы, грейды, ставки
//! сверхурочных, виды отпусков, типы устройств) — это один и тот же
//! паттерн: кэш коллекции, поиск, постранка, создание/правка/удаление
//! через REST и журнал доступа. Здесь этот паттерн собран один раз:
//!
//! - [`controller::ResourceListController`] — список одного справочника;
//! - [`validate`] — локальная проверка кода перед отправкой;
//! - [`picker::ReferencePicker`] — подбор значения ссылочного поля;
//! - [`reconciler::BulkToggleReconciler`] — матрица активации
//!   (согласование флажков с удалённой join-таблицей).
//!
//! Отрисовка, роутинг и диалоги — внешние коллабораторы; движок
//! работает без них.

pub mod audit;
pub mod controller;
pub mod gateway;
pub mod permissions;
pub mod picker;
pub mod reconciler;
pub mod screens;
pub mod shared;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;
