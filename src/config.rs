use std::{collections::HashMap, fs, path::Path};

/// INI-style key/value configuration.
///
/// Lines are `key = value` pairs grouped under `[section]` headers; keys before the
/// first header are globals and act as fallbacks for every section. `#` and `;` start
/// a comment line and surrounding double quotes are stripped from values.
///
/// ```
/// use rustylog::config::Config;
///
/// let config = Config::parse("level = info\n[Logging]\nname = api\n");
/// assert_eq!(config.get("Logging", "name"), Some("api"));
/// assert_eq!(config.get_or_default("Logging", "level", "warning"), "info");
/// ```
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the path when the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .map(|content| Self::parse(&content))
            .map_err(|e| format!("Error reading file {}: {e}", path.display()))
    }

    /// Parses configuration text. Lines that are neither headers nor `key = value`
    /// pairs are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut config = Self::empty();
        let mut current_section: Option<String> = None;

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_owned());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_owned();
            let value = value.trim().trim_matches('"').to_owned();

            let table = match &current_section {
                Some(sec) => config.sections.entry(sec.clone()).or_default(),
                None => &mut config.globals,
            };
            table.insert(key, value);
        }
        config
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value of `key` in `section`, without looking at globals.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// Section value, then global value, then `default`.
    #[must_use]
    pub fn get_or_default<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .or_else(|| self.get_global(key))
            .unwrap_or(default)
    }

    /// Like [`get_or_default`](Self::get_or_default), but blank values fall through.
    #[must_use]
    pub fn get_non_empty_or_default<'a>(
        &'a self,
        section: &str,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .unwrap_or(default)
    }
}
