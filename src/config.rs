use crate::scoreboard::date_key;
use chrono::Local;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TITLE: &str = "전서진의 한글 용사 천재 되기 프로젝트";
pub const DEFAULT_DESCRIPTION: &str = "매일매일 성장하는 전서진의 한글 실력!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed_date: String,
    pub title: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), &date_key(Local::now().date_naive()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, today_key: &str) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            seed_date: non_empty("SCORE_SEED_DATE")
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| today_key.to_string()),
            title: non_empty("APP_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: non_empty("APP_DESCRIPTION")
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}
