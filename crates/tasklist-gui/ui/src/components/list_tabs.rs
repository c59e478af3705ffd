use tasklist_core::{
  ListRecord,
  TabRoster
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_state
};

use super::ListTabButton;

#[derive(Properties, PartialEq)]
pub struct ListTabsProps {
  pub lists:     Vec<ListRecord>,
  pub roster:    TabRoster,
  pub on_select: Callback<String>,
  pub on_key:    Callback<(String, String)>
}

#[function_component(ListTabs)]
pub fn list_tabs(
  props: &ListTabsProps
) -> Html {
  let keyboard_driven = use_state(|| false);

  let on_select = {
    let keyboard_driven =
      keyboard_driven.clone();
    let on_select =
      props.on_select.clone();
    Callback::from(move |id: String| {
      keyboard_driven.set(false);
      on_select.emit(id);
    })
  };

  let on_key = {
    let keyboard_driven =
      keyboard_driven.clone();
    let on_key = props.on_key.clone();
    Callback::from(
      move |event: (String, String)| {
        keyboard_driven.set(true);
        on_key.emit(event);
      }
    )
  };

  let active_descendant = props
    .roster
    .active()
    .map(tab_element_id);

  html! {
      <ul
          class="list-tab"
          role="tablist"
          aria-activedescendant={active_descendant}
      >
          {
              for props.lists.iter().map(|list| html! {
                  <ListTabButton
                      key={list.id.clone()}
                      element_id={tab_element_id(&list.id)}
                      list_id={list.id.clone()}
                      title={list.title.clone()}
                      is_active={props.roster.is_active(&list.id)}
                      tab_index={props.roster.tab_index(&list.id)}
                      take_focus={*keyboard_driven}
                      on_select={on_select.clone()}
                      on_key={on_key.clone()}
                  />
              })
          }
      </ul>
  }
}

fn tab_element_id(list_id: &str) -> String {
  format!("list-tab-item-{list_id}")
}
