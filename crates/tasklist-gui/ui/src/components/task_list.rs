use chrono::{
  DateTime,
  Utc
};
use tasklist_core::{
  DisplayFilter,
  Locale,
  TaskRecord
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:   Vec<TaskRecord>,
  pub list_id: Option<String>,
  pub filter:  DisplayFilter,
  pub locale:  Locale,
  pub now:     DateTime<Utc>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let show_remaining =
    props.filter == DisplayFilter::Todo;

  html! {
      <ul>
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TaskListRow
                      key={task.id.clone()}
                      task={task.clone()}
                      list_id={props.list_id.clone()}
                      show_remaining={show_remaining}
                      locale={props.locale}
                      now={props.now}
                  />
              })
          }
      </ul>
  }
}
