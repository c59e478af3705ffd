use crate::i18n::Locale;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum FetchError {
  #[error("no access token available")]
  MissingToken,
  #[error("network error: {0}")]
  Network(String),
  #[error(
    "request was rejected with status \
     {0}"
  )]
  Unauthorized(u16),
  #[error(
    "request failed with status {0}"
  )]
  Status(u16),
  #[error(
    "failed to decode response: {0}"
  )]
  Decode(String)
}

impl FetchError {
  #[must_use]
  pub fn from_status(
    status: u16
  ) -> Option<Self> {
    match status {
      | 200..=299 => None,
      | 401 | 403 => {
        Some(Self::Unauthorized(status))
      }
      | other => Some(Self::Status(other))
    }
  }

  #[must_use]
  pub fn kind(&self) -> &'static str {
    match self {
      | Self::MissingToken => {
        "missing_token"
      }
      | Self::Network(_) => "network",
      | Self::Unauthorized(_) => "auth",
      | Self::Status(_) => "status",
      | Self::Decode(_) => "decode"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum FetchFailure {
  Lists,
  Tasks
}

impl FetchFailure {
  #[must_use]
  pub fn prefix(
    self,
    locale: Locale
  ) -> &'static str {
    let messages = locale.messages();
    match self {
      | Self::Lists => {
        messages.lists_fetch_failed
      }
      | Self::Tasks => {
        messages.tasks_fetch_failed
      }
    }
  }

  #[must_use]
  pub fn banner(
    self,
    locale: Locale,
    error: &FetchError
  ) -> String {
    format!(
      "{}{error}",
      self.prefix(locale)
    )
  }
}
