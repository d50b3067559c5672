use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub comments: CommentSettings,
    pub notifications: NotificationSettings,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

// 每次提交传给分类器的配置包；编排器本身不解读其内容
#[derive(Debug, Deserialize, Clone)]
pub struct CommentSettings {
    pub active: bool,
    pub moderation: bool,
}

impl Default for CommentSettings {
    fn default() -> Self {
        Self {
            active: true,
            moderation: false,
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct NotificationSettings {
    pub capacity: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let env_map = collect_env_vars();

        let s = config::Config::builder()
            .set_default("database.url", "sqlite://data/commentary.db")?
            .set_default("comments.active", true)?
            .set_default("comments.moderation", false)?
            .set_default("notifications.capacity", 100)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(config::File::from_str(
                &serde_json::to_string(&env_map)
                    .expect("Environment variables should serialize to JSON"),
                config::FileFormat::Json,
            ))
            .build()?;

        s.try_deserialize()
    }

    pub fn comment_settings(&self) -> CommentSettings {
        self.comments.clone()
    }
}

fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("COMMENTARY_"))
        .map(|(k, v)| {
            let new_key = k
                .trim_start_matches("COMMENTARY_")
                .replace("__", ".")
                .to_lowercase();
            (new_key, v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let settings = Settings::new().expect("defaults should load without files");

        assert!(settings.database.url.starts_with("sqlite://"));
        assert!(settings.comments.active);
        assert!(!settings.comments.moderation);
        assert_eq!(settings.notifications.capacity, 100);
    }
}
