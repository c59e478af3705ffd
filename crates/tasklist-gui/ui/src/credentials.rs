use tasklist_core::credentials::token_from_cookies;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub fn access_token(
  cookie_name: &str
) -> Option<String> {
  let cookies = web_sys::window()?
    .document()?
    .dyn_into::<HtmlDocument>()
    .ok()?
    .cookie()
    .ok()?;
  token_from_cookies(&cookies, cookie_name)
}
