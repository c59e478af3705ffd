use tracing::{
  debug,
  trace
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum NavKey {
  Confirm,
  Next,
  Previous
}

impl NavKey {
  #[must_use]
  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "Enter" | " " => {
        Some(Self::Confirm)
      }
      | "ArrowRight" => Some(Self::Next),
      | "ArrowLeft" => {
        Some(Self::Previous)
      }
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum RosterError {
  #[error("list `{0}` is not in the tab list")]
  UnknownList(String)
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TabRoster {
  ids:    Vec<String>,
  active: Option<String>
}

impl TabRoster {
  #[must_use]
  pub fn new(ids: Vec<String>) -> Self {
    let mut roster = Self::default();
    roster.reset(ids);
    roster
  }

  pub fn reset(
    &mut self,
    ids: Vec<String>
  ) -> Option<&str> {
    self.active = ids.first().cloned();
    self.ids = ids;
    debug!(
      tabs = self.ids.len(),
      active = ?self.active,
      "tab roster reset"
    );
    self.active.as_deref()
  }

  pub fn ids(&self) -> &[String] {
    &self.ids
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn active(&self) -> Option<&str> {
    self.active.as_deref()
  }

  pub fn is_active(
    &self,
    id: &str
  ) -> bool {
    self.active.as_deref() == Some(id)
  }

  pub fn tab_index(
    &self,
    id: &str
  ) -> i32 {
    if self.is_active(id) { 0 } else { -1 }
  }

  pub fn activate(
    &mut self,
    id: &str
  ) -> Result<String, RosterError> {
    if !self.ids.iter().any(|x| x == id)
    {
      return Err(
        RosterError::UnknownList(
          id.to_string()
        )
      );
    }

    trace!(id, "activating tab");
    self.active = Some(id.to_string());
    Ok(id.to_string())
  }

  pub fn on_key(
    &mut self,
    key: NavKey,
    focused: &str
  ) -> Result<Option<String>, RosterError>
  {
    match key {
      | NavKey::Confirm => {
        self.activate(focused).map(Some)
      }
      | NavKey::Next
      | NavKey::Previous => {
        let len = self.ids.len();
        if len == 0 {
          return Ok(None);
        }
        let Some(index) =
          self.active_index()
        else {
          return Ok(None);
        };

        let target = if key == NavKey::Next
        {
          (index + 1) % len
        } else {
          (index + len - 1) % len
        };
        let id = self.ids[target].clone();
        self.activate(&id).map(Some)
      }
    }
  }

  fn active_index(
    &self
  ) -> Option<usize> {
    let active = self.active.as_deref()?;
    self
      .ids
      .iter()
      .position(|id| id == active)
  }
}
