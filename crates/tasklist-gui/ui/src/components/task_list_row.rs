use chrono::{
  DateTime,
  Local,
  Utc
};
use tasklist_core::datetime::{
  display_limit,
  parse_limit
};
use tasklist_core::{
  Locale,
  Remaining,
  TaskRecord
};
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:           TaskRecord,
  pub list_id:        Option<String>,
  pub show_remaining: bool,
  pub locale:         Locale,
  pub now:            DateTime<Utc>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let task = &props.task;
  let limit =
    display_limit(&task.limit, &Local);
  let remaining = if props.show_remaining
  {
    parse_limit(&task.limit, &Local)
      .ok()
      .map(|deadline| {
        props.locale.remaining(
          &Remaining::between(
            deadline, props.now
          )
        )
      })
      .unwrap_or_default()
  } else {
    String::new()
  };
  let status =
    props.locale.status_label(task.done);

  let body = html! {
      <>
          { task.title.clone() }
          <br />
          { limit }
          { remaining }
          <br />
          { status }
      </>
  };

  html! {
      <li class="task-item">
          {
              match props.list_id.clone() {
                  | Some(list_id) => html! {
                      <Link<Route>
                          to={Route::TaskDetail { list_id, task_id: task.id.clone() }}
                          classes={classes!("task-item-link")}
                      >
                          { body }
                      </Link<Route>>
                  },
                  | None => html! {
                      <span class="task-item-link">{ body }</span>
                  }
              }
          }
      </li>
  }
}
