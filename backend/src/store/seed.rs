//! Hardcoded catalogue every process starts with when seeding is enabled.

use common::model::item::Item;
use common::model::product::{NewProduct, Product};

use super::ids::{ShortIdGenerator, TimestampIdGenerator};
use super::{ItemStore, ProductStore};

const PRODUCTS: &[(&str, &str, &str, f64, u32)] = &[
    ("Ноутбук Asus", "Ноутбуки", "15.6\", 8GB RAM, 512GB SSD", 55000.0, 5),
    ("Ноутбук HP", "Ноутбуки", "14\", 16GB RAM, 1TB SSD", 72000.0, 3),
    ("Смартфон Samsung", "Смартфоны", "6.5\", 128GB", 35000.0, 8),
    ("Смартфон Xiaomi", "Смартфоны", "6.3\", 64GB", 18000.0, 12),
    ("Наушники Sony", "Аудио", "Bluetooth, шумоподавление", 8500.0, 15),
    ("Клавиатура Logitech", "Аксессуары", "механическая, RGB", 4500.0, 7),
    ("Монитор LG", "Мониторы", "27\", 4K, IPS", 28000.0, 4),
    ("Мышь Razer", "Аксессуары", "игровая, 16000 DPI", 3200.0, 9),
    ("Планшет iPad", "Планшеты", "10.2\", 64GB", 29000.0, 6),
    ("Внешний диск", "Хранение", "1TB, USB 3.0", 4200.0, 11),
];

const ITEMS: &[(u64, &str, f64)] = &[(1, "Кофе", 450.0), (2, "Кружка", 350.0), (3, "Чайник", 2100.0)];

pub fn products() -> ProductStore {
    let drafts = PRODUCTS
        .iter()
        .map(|&(name, category, description, price, stock)| NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
            stock,
        });
    ProductStore::seeded(ShortIdGenerator::default(), drafts, Product::from_new)
}

pub fn items() -> ItemStore {
    let items = ITEMS
        .iter()
        .map(|&(id, name, price)| Item {
            id,
            name: name.to_string(),
            price,
        })
        .collect();
    ItemStore::with_records(TimestampIdGenerator::new(), items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn seeds_ten_products_with_distinct_ids() {
        let products = products().list().await;

        assert_eq!(products.len(), 10);
        assert_eq!(products[0].name, "Ноутбук Asus");
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test]
    async fn seeds_three_items_in_order() {
        let names: Vec<_> = items().list().await.into_iter().map(|i| i.name).collect();

        assert_eq!(names, ["Кофе", "Кружка", "Чайник"]);
    }
}
