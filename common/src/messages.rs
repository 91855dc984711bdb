//! User-facing messages returned by the API. Kept in Russian, as the shop's UI is.

pub const PRODUCT_NOT_FOUND: &str = "Товар не найден";
pub const ALL_FIELDS_REQUIRED: &str = "Все поля обязательны";
pub const ROUTE_NOT_FOUND: &str = "Маршрут не найден";
pub const ITEM_DELETED: &str = "Товар удален";
pub const MALFORMED_BODY: &str = "Некорректное тело запроса";
