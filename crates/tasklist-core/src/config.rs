use std::fs;
use std::path::Path;

use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  debug,
  info,
  warn
};

use crate::credentials::DEFAULT_TOKEN_COOKIE;
use crate::i18n::Locale;

pub const DEFAULT_API_BASE: &str =
  "http://localhost:3000";

pub const ENV_OVERRIDES: [(&str, &str); 2] = [
  ("TASKLIST_API_BASE", "api.base_url"),
  ("TASKLIST_LOCALE", "ui.locale")
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub api_base:     String,
  pub token_cookie: String,
  pub locale:       Locale
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_base:     DEFAULT_API_BASE
        .to_string(),
      token_cookie: DEFAULT_TOKEN_COOKIE
        .to_string(),
      locale:       Locale::default()
    }
  }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
  #[serde(default)]
  api:  Option<ApiSection>,
  #[serde(default)]
  auth: Option<AuthSection>,
  #[serde(default)]
  ui:   Option<UiSection>
}

#[derive(Debug, Deserialize)]
struct ApiSection {
  base_url: Option<String>
}

#[derive(Debug, Deserialize)]
struct AuthSection {
  token_cookie: Option<String>
}

#[derive(Debug, Deserialize)]
struct UiSection {
  locale: Option<String>
}

impl Config {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let file =
      toml::from_str::<ConfigFile>(raw)
        .context(
          "failed to parse tasklist \
           config"
        )?;

    let mut cfg = Self::default();
    if let Some(base) = file
      .api
      .and_then(|api| api.base_url)
    {
      cfg.set("api.base_url", &base)?;
    }
    if let Some(cookie) = file
      .auth
      .and_then(|auth| auth.token_cookie)
    {
      cfg.set(
        "auth.token_cookie",
        &cookie
      )?;
    }
    if let Some(locale) = file
      .ui
      .and_then(|ui| ui.locale)
    {
      cfg.set("ui.locale", &locale)?;
    }

    Ok(cfg)
  }

  #[tracing::instrument]
  pub fn load(
    path: &Path
  ) -> anyhow::Result<Self> {
    let raw = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;
    let cfg = Self::from_toml_str(&raw)
      .with_context(|| {
        format!(
          "invalid config in {}",
          path.display()
        )
      })?;
    info!(file = %path.display(), "loaded tasklist config");
    Ok(cfg)
  }

  #[must_use]
  pub fn from_embedded(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => {
        info!(
          api_base = %cfg.api_base,
          locale = ?cfg.locale,
          "loaded embedded config"
        );
        cfg
      }
      | Err(error) => {
        tracing::error!(error = %format!("{error:#}"), "failed to parse embedded config; using defaults");
        Self::default()
      }
    }
  }

  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (key, value) in overrides {
      match self.set(&key, &value) {
        | Ok(()) => {
          debug!(key = %key, value = %value, "applied config override")
        }
        | Err(error) => {
          warn!(key = %key, error = %error, "ignoring config override")
        }
      }
    }
  }

  pub fn apply_env<F>(
    &mut self,
    lookup: F
  ) where
    F: Fn(&str) -> Option<String>
  {
    self.apply_overrides(
      ENV_OVERRIDES.iter().filter_map(
        |(var, key)| {
          lookup(var).map(|value| {
            (key.to_string(), value)
          })
        }
      )
    );
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let value = value.trim();
    match key {
      | "api.base_url" => {
        if value.is_empty() {
          return Err(anyhow!(
            "api.base_url cannot be empty"
          ));
        }
        self.api_base = value
          .trim_end_matches('/')
          .to_string();
      }
      | "auth.token_cookie" => {
        if value.is_empty() {
          return Err(anyhow!(
            "auth.token_cookie cannot be \
             empty"
          ));
        }
        self.token_cookie =
          value.to_string();
      }
      | "ui.locale" => {
        self.locale = Locale::parse(value)
          .ok_or_else(|| {
            anyhow!(
              "unsupported locale \
               `{value}`"
            )
          })?;
      }
      | other => {
        return Err(anyhow!(
          "unknown config key `{other}`"
        ));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn empty_document_keeps_defaults() {
    let cfg = Config::from_toml_str("")
      .expect("parse empty");
    assert_eq!(cfg, Config::default());
  }

  #[test]
  fn sections_override_defaults() {
    let cfg = Config::from_toml_str(
      r#"
[api]
base_url = "https://todo.example/api/"

[ui]
locale = "en"
"#
    )
    .expect("parse config");
    assert_eq!(
      cfg.api_base,
      "https://todo.example/api"
    );
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(cfg.token_cookie, "token");
  }

  #[test]
  fn bad_locale_is_an_error_but_embedded_falls_back(
  ) {
    let raw = "[ui]\nlocale = \"xx\"\n";
    assert!(
      Config::from_toml_str(raw).is_err()
    );
    assert_eq!(
      Config::from_embedded(raw),
      Config::default()
    );
  }

  #[test]
  fn overrides_skip_unknown_keys() {
    let mut cfg = Config::default();
    cfg.apply_overrides([
      (
        "auth.token_cookie".to_string(),
        "session".to_string()
      ),
      (
        "nope".to_string(),
        "x".to_string()
      ),
      (
        "api.base_url".to_string(),
        "  ".to_string()
      ),
    ]);
    assert_eq!(cfg.token_cookie, "session");
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
  }

  #[test]
  fn env_lookup_maps_onto_config_keys() {
    let mut cfg = Config::default();
    cfg.apply_env(|var| match var {
      | "TASKLIST_API_BASE" => Some(
        "https://todo.example/".to_string()
      ),
      | "TASKLIST_LOCALE" => {
        Some("en".to_string())
      }
      | _ => None
    });
    assert_eq!(
      cfg.api_base,
      "https://todo.example"
    );
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(cfg.token_cookie, "token");
  }

  #[test]
  fn unset_env_keeps_embedded_values() {
    let mut cfg = Config::from_embedded(
      "[ui]\nlocale = \"en\"\n"
    );
    cfg.apply_env(|_| None);
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
  }

  #[test]
  fn loads_from_file() {
    let mut file =
      tempfile::NamedTempFile::new()
        .expect("tempfile");
    writeln!(
      file,
      "[auth]\ntoken_cookie = \"jwt\""
    )
    .expect("write config");
    let cfg = Config::load(file.path())
      .expect("load config");
    assert_eq!(cfg.token_cookie, "jwt");
  }

  #[test]
  fn missing_file_reports_path() {
    let err = Config::load(Path::new(
      "/definitely/not/here.toml"
    ))
    .expect_err("missing file");
    assert!(
      format!("{err:#}")
        .contains("/definitely/not/here.toml")
    );
  }
}
