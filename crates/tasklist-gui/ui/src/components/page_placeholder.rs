use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct PagePlaceholderProps {
  pub message: String
}

#[function_component(PagePlaceholder)]
pub fn page_placeholder(
  props: &PagePlaceholderProps
) -> Html {
  html! {
      <main class="placeholder">
          <p>{ props.message.clone() }</p>
          <Link<Route> to={Route::Home}>{ "←" }</Link<Route>>
      </main>
  }
}
