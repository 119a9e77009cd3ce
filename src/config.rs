use crate::login::{Cookie, CookieStore, DEFAULT_LANDING_ROUTE, TOKEN_COOKIE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "todo-login";
const SETTINGS_FILE: &str = "config.toml";
const COOKIE_FILE: &str = "cookies.json";

pub const DEFAULT_API_URL: &str = "https://todo-fastapi-338k.onrender.com";

fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not find config directory")?
        .join(CONFIG_DIR);

    fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Optional `config.toml` contents.
#[derive(Deserialize, Default, Debug)]
struct SettingsFile {
    api_url: Option<String>,
    landing_route: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub landing_route: String,
}

impl Settings {
    /// Environment wins over the file, the file wins over the defaults.
    fn resolve(file: SettingsFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = env("TODO_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let landing_route = env("TODO_LANDING_ROUTE")
            .or(file.landing_route)
            .unwrap_or_else(|| DEFAULT_LANDING_ROUTE.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            landing_route,
        }
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_settings() -> Result<Settings> {
    let path = get_config_dir()?.join(SETTINGS_FILE);
    let file = read_settings_file(&path)?;
    Ok(Settings::resolve(file, |key| std::env::var(key).ok()))
}

/// Cookies kept between runs, keyed by name.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct CookieJar {
    #[serde(skip)]
    path: PathBuf,
    cookies: BTreeMap<String, Cookie>,
}

impl CookieJar {
    pub fn open() -> Result<Self> {
        let path = get_config_dir()?.join(COOKIE_FILE);
        Self::open_at(path)
    }

    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                cookies: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path).context("Failed to read cookie jar")?;
        let mut jar: CookieJar = serde_json::from_str(&content).context("Failed to parse cookie jar")?;
        jar.path = path;
        Ok(jar)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&self.path, content).context("Failed to write cookie jar")
    }

    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Cookie> {
        self.cookies.remove(name)
    }

    /// Value of the `user_access_token` cookie.
    pub fn access_token(&self) -> Option<&str> {
        self.get(TOKEN_COOKIE).map(|c| c.value.as_str())
    }
}

impl CookieStore for CookieJar {
    fn set(&mut self, cookie: Cookie) {
        self.cookies.insert(cookie.name.clone(), cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::COOKIE_PATH;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_settings_defaults() {
        let s = Settings::resolve(SettingsFile::default(), env_from(&[]));
        assert_eq!(s.api_url, DEFAULT_API_URL);
        assert_eq!(s.landing_route, "todo/todo.html");
    }

    #[test]
    fn test_settings_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "api_url = \"http://localhost:8000/\"\nlanding_route = \"home\"\n").unwrap();

        let file = read_settings_file(&path).unwrap();
        let s = Settings::resolve(file, env_from(&[]));
        assert_eq!(s.api_url, "http://localhost:8000");
        assert_eq!(s.landing_route, "home");

        let file = read_settings_file(&path).unwrap();
        let s = Settings::resolve(file, env_from(&[("TODO_API_URL", "http://127.0.0.1:9")]));
        assert_eq!(s.api_url, "http://127.0.0.1:9");
        assert_eq!(s.landing_route, "home");
    }

    #[test]
    fn test_settings_file_missing_or_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = read_settings_file(&dir.path().join("nope.toml")).unwrap();
        assert!(missing.api_url.is_none());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "api_url = [").unwrap();
        assert!(read_settings_file(&bad).is_err());
    }

    #[test]
    fn test_cookie_jar_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(COOKIE_FILE);

        let mut jar = CookieJar::open_at(&path).unwrap();
        assert!(jar.access_token().is_none());
        jar.set(Cookie::new(TOKEN_COOKIE, "abc123", COOKIE_PATH));
        jar.save().unwrap();

        let mut reopened = CookieJar::open_at(&path).unwrap();
        assert_eq!(reopened.access_token(), Some("abc123"));
        assert_eq!(reopened.get(TOKEN_COOKIE).unwrap().path, "/");

        assert!(reopened.remove(TOKEN_COOKIE).is_some());
        reopened.save().unwrap();
        assert!(CookieJar::open_at(&path).unwrap().access_token().is_none());
    }

    #[test]
    fn test_cookie_jar_overwrites_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut jar = CookieJar::open_at(dir.path().join(COOKIE_FILE)).unwrap();
        jar.set(Cookie::new(TOKEN_COOKIE, "old", COOKIE_PATH));
        jar.set(Cookie::new(TOKEN_COOKIE, "new", COOKIE_PATH));
        assert_eq!(jar.access_token(), Some("new"));
    }
}
