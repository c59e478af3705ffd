mod home;

use std::sync::OnceLock;

use tasklist_core::Config;
use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::components::{
  PageHeader,
  PagePlaceholder
};

const CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/list/new")]
  NewList,
  #[at("/lists/:list_id/edit")]
  EditList { list_id: String },
  #[at("/task/new")]
  NewTask,
  #[at("/lists/:list_id/tasks/:task_id")]
  TaskDetail {
    list_id: String,
    task_id: String
  },
  #[not_found]
  #[at("/404")]
  NotFound
}

pub fn app_config() -> &'static Config {
  static CONFIG: OnceLock<Config> =
    OnceLock::new();
  CONFIG.get_or_init(load_config)
}

fn load_config() -> Config {
  let mut config =
    Config::from_embedded(CONFIG_TOML);
  config.apply_env(|var| {
    let value = match var {
      | "TASKLIST_API_BASE" => {
        option_env!("TASKLIST_API_BASE")
      }
      | "TASKLIST_LOCALE" => {
        option_env!("TASKLIST_LOCALE")
      }
      | _ => None
    };
    value.map(str::to_string)
  });
  config
}

fn switch(route: Route) -> Html {
  match route {
    | Route::Home => {
      html! { <home::Home /> }
    }
    | Route::NewList
    | Route::EditList { .. }
    | Route::NewTask
    | Route::TaskDetail { .. }
    | Route::NotFound => {
      tracing::debug!(
        path = %route.to_path(),
        "route has no view in this page"
      );
      let messages =
        app_config().locale.messages();
      html! {
          <PagePlaceholder message={messages.page_not_ready.to_string()} />
      }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let messages =
    app_config().locale.messages();

  html! {
      <BrowserRouter>
          <PageHeader title={messages.app_title.to_string()} />
          <Switch<Route> render={switch} />
      </BrowserRouter>
  }
}
