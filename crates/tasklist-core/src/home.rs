use tasklist_shared::{
  ListRecord,
  TaskRecord
};
use tracing::{
  debug,
  info,
  warn
};

use crate::error::{
  FetchError,
  FetchFailure
};
use crate::filter::{
  DisplayFilter,
  visible_tasks
};
use crate::i18n::Locale;
use crate::roster::{
  NavKey,
  RosterError,
  TabRoster
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
)]
pub struct FetchTicket {
  pub list_id: String,
  pub seq:     u64
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
  locale:        Locale,
  lists:         Vec<ListRecord>,
  roster:        TabRoster,
  tasks:         Vec<TaskRecord>,
  filter:        DisplayFilter,
  error_message: Option<String>,
  next_seq:      u64,
  latest:        Option<FetchTicket>
}

impl Default for HomeState {
  fn default() -> Self {
    Self::new(Locale::default())
  }
}

impl HomeState {
  #[must_use]
  pub fn new(locale: Locale) -> Self {
    Self {
      locale,
      lists: Vec::new(),
      roster: TabRoster::default(),
      tasks: Vec::new(),
      filter: DisplayFilter::default(),
      error_message: None,
      next_seq: 0,
      latest: None
    }
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  pub fn lists(&self) -> &[ListRecord] {
    &self.lists
  }

  pub fn tasks(&self) -> &[TaskRecord] {
    &self.tasks
  }

  pub fn filter(&self) -> DisplayFilter {
    self.filter
  }

  pub fn error_message(
    &self
  ) -> Option<&str> {
    self.error_message.as_deref()
  }

  pub fn active_list_id(
    &self
  ) -> Option<&str> {
    self.roster.active()
  }

  pub fn roster(&self) -> &TabRoster {
    &self.roster
  }

  pub fn latest_fetch(
    &self
  ) -> Option<&FetchTicket> {
    self.latest.as_ref()
  }

  #[must_use]
  pub fn visible_tasks(
    &self
  ) -> Vec<TaskRecord> {
    visible_tasks(&self.tasks, self.filter)
  }

  #[tracing::instrument(skip_all, fields(count = lists.len()))]
  pub fn lists_loaded(
    &mut self,
    lists: Vec<ListRecord>
  ) -> Option<FetchTicket> {
    let ids = lists
      .iter()
      .map(|list| list.id.clone())
      .collect();
    self.lists = lists;

    let first = self
      .roster
      .reset(ids)
      .map(str::to_string);
    match first {
      | Some(first) => {
        info!(list_id = %first, "selecting first list");
        Some(self.issue(first))
      }
      | None => {
        info!(
          "no lists; nothing to fetch"
        );
        self.tasks.clear();
        self.latest = None;
        None
      }
    }
  }

  pub fn list_selected(
    &mut self,
    id: &str
  ) -> Result<FetchTicket, RosterError> {
    let id = self.roster.activate(id)?;
    debug!(list_id = %id, "list selected");
    Ok(self.issue(id))
  }

  pub fn key_pressed(
    &mut self,
    key: &str,
    focused: &str
  ) -> Result<Option<FetchTicket>, RosterError>
  {
    let Some(key) = NavKey::from_key(key)
    else {
      return Ok(None);
    };
    let activated =
      self.roster.on_key(key, focused)?;
    Ok(activated.map(|id| {
      debug!(list_id = %id, ?key, "list selected by keyboard");
      self.issue(id)
    }))
  }

  pub fn tasks_loaded(
    &mut self,
    ticket: &FetchTicket,
    tasks: Vec<TaskRecord>
  ) -> bool {
    if !self.is_latest(ticket) {
      warn!(
        list_id = %ticket.list_id,
        seq = ticket.seq,
        "dropping stale task response"
      );
      return false;
    }
    debug!(
      list_id = %ticket.list_id,
      count = tasks.len(),
      "tasks loaded"
    );
    self.tasks = tasks;
    true
  }

  pub fn fetch_failed(
    &mut self,
    failure: FetchFailure,
    error: &FetchError
  ) {
    warn!(
      ?failure,
      kind = error.kind(),
      error = %error,
      "fetch failed"
    );
    self.error_message = Some(
      failure.banner(self.locale, error)
    );
  }

  pub fn tasks_failed(
    &mut self,
    ticket: &FetchTicket,
    error: &FetchError
  ) -> bool {
    if !self.is_latest(ticket) {
      warn!(
        list_id = %ticket.list_id,
        seq = ticket.seq,
        error = %error,
        "dropping stale task failure"
      );
      return false;
    }
    self.fetch_failed(
      FetchFailure::Tasks,
      error
    );
    true
  }

  pub fn set_filter(
    &mut self,
    filter: DisplayFilter
  ) {
    debug!(%filter, "display filter changed");
    self.filter = filter;
  }

  fn is_latest(
    &self,
    ticket: &FetchTicket
  ) -> bool {
    self.latest.as_ref() == Some(ticket)
  }

  fn issue(
    &mut self,
    list_id: String
  ) -> FetchTicket {
    self.next_seq += 1;
    let ticket = FetchTicket {
      list_id,
      seq: self.next_seq
    };
    self.latest = Some(ticket.clone());
    ticket
  }
}
