use tasklist_core::{
  DisplayFilter,
  Locale
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DisplaySelectProps {
  pub value:     DisplayFilter,
  pub locale:    Locale,
  pub on_change: Callback<DisplayFilter>
}

#[function_component(DisplaySelect)]
pub fn display_select(
  props: &DisplaySelectProps
) -> Html {
  let onchange = {
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        if let Some(input) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        {
          on_change.emit(
            DisplayFilter::from_select_value(
              &input.value()
            )
          );
        } else {
          tracing::warn!(
            "display filter event had \
             non-select target"
          );
        }
      }
    )
  };

  html! {
      <select
          class="display-select"
          value={props.value.as_str()}
          onchange={onchange}
      >
          {
              for DisplayFilter::ALL.into_iter().map(|filter| html! {
                  <option
                      value={filter.as_str()}
                      selected={filter == props.value}
                  >
                      { filter.label(props.locale) }
                  </option>
              })
          }
      </select>
  }
}
