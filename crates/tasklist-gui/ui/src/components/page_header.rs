use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
  pub title: String
}

#[function_component(PageHeader)]
pub fn page_header(
  props: &PageHeaderProps
) -> Html {
  html! {
      <header class="header">
          <h1>{ props.title.clone() }</h1>
      </header>
  }
}
