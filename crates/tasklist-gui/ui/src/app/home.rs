use std::rc::Rc;

use chrono::Utc;
use gloo::timers::callback::Interval;
use tasklist_core::{
  DisplayFilter,
  FetchError,
  FetchFailure,
  FetchTicket,
  HomeState,
  ListRecord,
  TaskRecord
};
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};
use yew_router::prelude::Link;

use super::{
  Route,
  app_config
};
use crate::api::{
  fetch_lists,
  fetch_tasks
};
use crate::components::{
  DisplaySelect,
  ListTabs,
  TaskList
};

const CLOCK_TICK_MS: u32 = 30_000;

#[derive(Clone, PartialEq)]
struct HomeStore(HomeState);

enum HomeAction {
  ListsLoaded(Vec<ListRecord>),
  ListsFailed(FetchError),
  ListSelected(String),
  KeyPressed {
    key:     String,
    focused: String
  },
  TasksLoaded(FetchTicket, Vec<TaskRecord>),
  TasksFailed(FetchTicket, FetchError),
  FilterChanged(DisplayFilter)
}

impl Reducible for HomeStore {
  type Action = HomeAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut state = self.0.clone();
    match action {
      | HomeAction::ListsLoaded(lists) => {
        state.lists_loaded(lists);
      }
      | HomeAction::ListsFailed(error) => {
        state.fetch_failed(
          FetchFailure::Lists,
          &error
        );
      }
      | HomeAction::ListSelected(id) => {
        if let Err(error) =
          state.list_selected(&id)
        {
          tracing::error!(%error, "tab click ignored");
        }
      }
      | HomeAction::KeyPressed {
        key,
        focused
      } => {
        if let Err(error) =
          state.key_pressed(&key, &focused)
        {
          tracing::error!(%error, key = %key, "tab key press ignored");
        }
      }
      | HomeAction::TasksLoaded(
        ticket,
        tasks
      ) => {
        state.tasks_loaded(&ticket, tasks);
      }
      | HomeAction::TasksFailed(
        ticket,
        error
      ) => {
        state.tasks_failed(&ticket, &error);
      }
      | HomeAction::FilterChanged(
        filter
      ) => state.set_filter(filter)
    }
    Rc::new(Self(state))
  }
}

#[function_component(Home)]
pub fn home() -> Html {
  let store = use_reducer(|| {
    HomeStore(HomeState::new(
      app_config().locale
    ))
  });
  let now = use_state(Utc::now);

  {
    let store = store.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match fetch_lists(app_config())
            .await
          {
            | Ok(lists) => {
              tracing::info!(
                count = lists.len(),
                "lists fetched"
              );
              store.dispatch(
                HomeAction::ListsLoaded(
                  lists
                )
              );
            }
            | Err(error) => {
              store.dispatch(
                HomeAction::ListsFailed(
                  error
                )
              )
            }
          }
        }
      );
      || ()
    });
  }

  {
    let store = store.clone();
    let latest =
      store.0.latest_fetch().cloned();
    use_effect_with(
      latest,
      move |ticket| {
        if let Some(ticket) = ticket.clone()
        {
          wasm_bindgen_futures::spawn_local(async move {
            tracing::debug!(list_id = %ticket.list_id, seq = ticket.seq, "fetching tasks");
            match fetch_tasks(app_config(), &ticket.list_id).await {
              | Ok(tasks) => store.dispatch(HomeAction::TasksLoaded(ticket, tasks)),
              | Err(error) => store.dispatch(HomeAction::TasksFailed(ticket, error)),
            }
          });
        }
        || ()
      }
    );
  }

  {
    let now = now.clone();
    use_effect_with((), move |_| {
      let interval = Interval::new(
        CLOCK_TICK_MS,
        move || now.set(Utc::now())
      );
      move || drop(interval)
    });
  }

  let on_select = {
    let store = store.clone();
    Callback::from(move |id: String| {
      store.dispatch(
        HomeAction::ListSelected(id)
      )
    })
  };

  let on_key = {
    let store = store.clone();
    Callback::from(
      move |(key, focused): (
        String,
        String
      )| {
        store.dispatch(
          HomeAction::KeyPressed {
            key,
            focused
          }
        )
      }
    )
  };

  let on_filter_change = {
    let store = store.clone();
    Callback::from(
      move |filter: DisplayFilter| {
        store.dispatch(
          HomeAction::FilterChanged(
            filter
          )
        )
      }
    )
  };

  let state = &store.0;
  let locale = state.locale();
  let messages = locale.messages();
  let active_list_id = state
    .active_list_id()
    .map(str::to_string);

  html! {
      <main class="task-list">
          <p class="error-message">{ state.error_message().unwrap_or_default() }</p>
          <div class="list-header">
              <h2>{ messages.lists_heading }</h2>
              <div class="list-menu">
                  <p>
                      <Link<Route> to={Route::NewList}>{ messages.new_list }</Link<Route>>
                  </p>
                  {
                      if let Some(list_id) = active_list_id.clone() {
                          html! {
                              <p>
                                  <Link<Route> to={Route::EditList { list_id }}>
                                      { messages.edit_selected_list }
                                  </Link<Route>>
                              </p>
                          }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
          <ListTabs
              lists={state.lists().to_vec()}
              roster={state.roster().clone()}
              on_select={on_select}
              on_key={on_key}
          />
          <div class="tasks">
              <div class="tasks-header">
                  <h2>{ messages.tasks_heading }</h2>
                  <p class="tasks-create-button">
                      <Link<Route> to={Route::NewTask}>{ messages.new_task }</Link<Route>>
                  </p>
              </div>
              <div class="display-select-wrapper">
                  <DisplaySelect
                      value={state.filter()}
                      locale={locale}
                      on_change={on_filter_change}
                  />
              </div>
              <TaskList
                  tasks={state.visible_tasks()}
                  list_id={active_list_id}
                  filter={state.filter()}
                  locale={locale}
                  now={*now}
              />
          </div>
      </main>
  }
}
