use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};
use tasklist_shared::TaskRecord;

use crate::i18n::Locale;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFilter {
  #[default]
  Todo,
  Done
}

impl DisplayFilter {
  pub const ALL: [Self; 2] =
    [Self::Todo, Self::Done];

  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Todo => "todo",
      | Self::Done => "done"
    }
  }

  #[must_use]
  pub fn from_select_value(
    raw: &str
  ) -> Self {
    raw.parse().unwrap_or_default()
  }

  #[must_use]
  pub fn label(
    self,
    locale: Locale
  ) -> &'static str {
    locale
      .status_label(self == Self::Done)
  }

  #[must_use]
  pub fn matches(
    self,
    task: &TaskRecord
  ) -> bool {
    task.done == (self == Self::Done)
  }
}

impl fmt::Display for DisplayFilter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for DisplayFilter {
  type Err = String;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s.trim() {
      | "todo" => Ok(Self::Todo),
      | "done" => Ok(Self::Done),
      | other => Err(format!(
        "unknown display filter `{other}`"
      ))
    }
  }
}

#[must_use]
pub fn visible_tasks(
  tasks: &[TaskRecord],
  filter: DisplayFilter
) -> Vec<TaskRecord> {
  tasks
    .iter()
    .filter(|task| filter.matches(task))
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task(
    id: &str,
    done: bool
  ) -> TaskRecord {
    TaskRecord {
      id: id.to_string(),
      title: format!("task {id}"),
      detail: None,
      limit: "2024-03-05T09:07:00Z"
        .to_string(),
      done
    }
  }

  fn ids(
    tasks: &[TaskRecord]
  ) -> Vec<&str> {
    tasks
      .iter()
      .map(|task| task.id.as_str())
      .collect()
  }

  #[test]
  fn keeps_backend_order_per_filter() {
    let tasks = vec![
      task("1", false),
      task("2", true),
      task("3", false),
      task("4", true),
    ];
    assert_eq!(
      ids(&visible_tasks(
        &tasks,
        DisplayFilter::Todo
      )),
      vec!["1", "3"]
    );
    assert_eq!(
      ids(&visible_tasks(
        &tasks,
        DisplayFilter::Done
      )),
      vec!["2", "4"]
    );
  }

  #[test]
  fn filtering_twice_changes_nothing() {
    let tasks = vec![
      task("1", true),
      task("2", false),
      task("3", true),
    ];
    for filter in DisplayFilter::ALL {
      let once =
        visible_tasks(&tasks, filter);
      let twice =
        visible_tasks(&once, filter);
      assert_eq!(once, twice);
    }
  }

  #[test]
  fn select_values_round_trip_and_fall_back(
  ) {
    for filter in DisplayFilter::ALL {
      assert_eq!(
        DisplayFilter::from_select_value(
          filter.as_str()
        ),
        filter
      );
    }
    assert_eq!(
      DisplayFilter::from_select_value(
        "archived"
      ),
      DisplayFilter::Todo
    );
    assert!(
      "archived"
        .parse::<DisplayFilter>()
        .is_err()
    );
  }
}
