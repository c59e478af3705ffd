use tasklist_core::NavKey;
use web_sys::{
  HtmlElement,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct ListTabButtonProps {
  pub element_id: String,
  pub list_id:    String,
  pub title:      String,
  pub is_active:  bool,
  pub tab_index:  i32,
  pub take_focus: bool,
  pub on_select:  Callback<String>,
  pub on_key:     Callback<(String, String)>
}

#[function_component(ListTabButton)]
pub fn list_tab_button(
  props: &ListTabButtonProps
) -> Html {
  let node = use_node_ref();

  {
    let node = node.clone();
    use_effect_with(
      (props.is_active, props.take_focus),
      move |(is_active, take_focus)| {
        if *is_active
          && *take_focus
          && let Some(element) =
            node.cast::<HtmlElement>()
          && let Err(err) = element.focus()
        {
          tracing::warn!(error = ?err, "failed to focus active list tab");
        }
        || ()
      }
    );
  }

  let onclick = {
    let on_select =
      props.on_select.clone();
    let list_id = props.list_id.clone();
    Callback::from(move |_: MouseEvent| {
      on_select.emit(list_id.clone())
    })
  };

  let onkeydown = {
    let on_key = props.on_key.clone();
    let list_id = props.list_id.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        let key = e.key();
        if NavKey::from_key(&key).is_none() {
          return;
        }
        // Space and arrows would otherwise
        // scroll the page.
        e.prevent_default();
        on_key.emit((key, list_id.clone()));
      }
    )
  };

  html! {
      <li
          ref={node}
          id={props.element_id.clone()}
          class={if props.is_active { "list-tab-item active" } else { "list-tab-item" }}
          role="tab"
          aria-selected={if props.is_active { "true" } else { "false" }}
          tabindex={props.tab_index.to_string()}
          onclick={onclick}
          onkeydown={onkeydown}
      >
          { props.title.clone() }
      </li>
  }
}
