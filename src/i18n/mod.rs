//! User-facing strings and the long date format
//!
//! A site speaks one language. Every string has a Russian default and can be
//! overridden from the `locale` section of `_config.yml`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Strings and date format for the site's single locale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Month names in the form used inside a date ("января", not "январь")
    pub months: Vec<String>,
    /// Long date pattern with `{day}`, `{month}` and `{year}` placeholders
    pub date_format: String,

    pub untitled: String,
    pub error_label: String,
    pub no_posts: String,
    pub index_failed: String,
    pub reload: String,
    pub missing_id: String,
    pub post_failed: String,
    pub back_to_list: String,
    pub read_more: String,
    pub search_placeholder: String,
}

impl Default for Locale {
    fn default() -> Self {
        let months = [
            "января",
            "февраля",
            "марта",
            "апреля",
            "мая",
            "июня",
            "июля",
            "августа",
            "сентября",
            "октября",
            "ноября",
            "декабря",
        ];

        Self {
            months: months.iter().map(|m| m.to_string()).collect(),
            date_format: "{day} {month} {year} г.".to_string(),
            untitled: "Статья без названия".to_string(),
            error_label: "Ошибка".to_string(),
            no_posts: "Пока нет статей.".to_string(),
            index_failed: "Не удалось загрузить статьи. Попробуйте обновить страницу.".to_string(),
            reload: "Обновить страницу".to_string(),
            missing_id: "Не указан идентификатор поста".to_string(),
            post_failed: "Не удалось загрузить статью".to_string(),
            back_to_list: "Вернуться к списку статей".to_string(),
            read_more: "Читать далее →".to_string(),
            search_placeholder: "Поиск статей...".to_string(),
        }
    }
}

impl Locale {
    /// Name of the month (1-based), falling back to the number
    pub fn month_name(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .cloned()
            .unwrap_or_else(|| month.to_string())
    }

    /// Format a date the long way, e.g. "10 января 2024 г."
    pub fn long_date(&self, date: NaiveDate) -> String {
        self.date_format
            .replace("{day}", &date.day().to_string())
            .replace("{month}", &self.month_name(date.month()))
            .replace("{year}", &date.year().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date_default() {
        let locale = Locale::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(locale.long_date(date), "10 января 2024 г.");
    }

    #[test]
    fn test_long_date_custom_pattern() {
        let locale = Locale {
            months: vec!["January".to_string(), "February".to_string()],
            date_format: "{month} {day}, {year}".to_string(),
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        assert_eq!(locale.long_date(date), "February 3, 2024");

        // short month table falls back to the number
        let date = NaiveDate::from_ymd_opt(2024, 12, 3).unwrap();
        assert_eq!(locale.long_date(date), "12 3, 2024");
    }
}
