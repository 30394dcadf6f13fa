//! Fixed application settings: branding, logging and SQL Lab defaults.
//!
//! None of these depend on the environment.

use serde::Serialize;

pub const APP_NAME: &str = "Source{d}";
pub const APP_ICON: &str = "/static/assets/images/sourced-logo-2x.png";
pub const APP_ICON_WIDTH: u32 = 126;

/// Database id of gitbase, the default database in SQL Lab.
pub const SQLLAB_DEFAULT_DBID: u32 = 2;
pub const LOG_LEVEL: &str = "INFO";

/// Views reachable without a CSRF token.
pub const WTF_CSRF_EXEMPT_LIST: [&str; 1] = ["superset.bblfsh.views.api"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AppSettings {
    pub app_name: String,
    pub app_icon: String,
    pub app_icon_width: u32,
    pub sqllab_default_dbid: u32,
    pub log_level: String,
    pub wtf_csrf_exempt_list: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            app_icon: APP_ICON.to_string(),
            app_icon_width: APP_ICON_WIDTH,
            sqllab_default_dbid: SQLLAB_DEFAULT_DBID,
            log_level: LOG_LEVEL.to_string(),
            wtf_csrf_exempt_list: WTF_CSRF_EXEMPT_LIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.app_name, "Source{d}");
        assert_eq!(settings.app_icon_width, 126);
        assert_eq!(settings.sqllab_default_dbid, 2);
        assert_eq!(settings.wtf_csrf_exempt_list, vec!["superset.bblfsh.views.api"]);
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(value["APP_NAME"], "Source{d}");
        assert_eq!(value["APP_ICON"], "/static/assets/images/sourced-logo-2x.png");
        assert_eq!(value["LOG_LEVEL"], "INFO");
        assert_eq!(value["SQLLAB_DEFAULT_DBID"], 2);
    }
}
