use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ListRecord {
  pub id:    String,
  #[serde(default)]
  pub title: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskRecord {
  pub id:     String,
  #[serde(default)]
  pub title:  String,
  #[serde(default)]
  pub detail: Option<String>,
  #[serde(default)]
  pub limit:  String,
  #[serde(default)]
  pub done:   bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TasksResponse {
  #[serde(default)]
  pub tasks: Option<Vec<TaskRecord>>
}

impl TasksResponse {
  #[must_use]
  pub fn into_tasks(
    self
  ) -> Vec<TaskRecord> {
    self.tasks.unwrap_or_default()
  }
}
