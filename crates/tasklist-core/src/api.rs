use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  utf8_percent_encode
};

pub const AUTHORIZATION_HEADER: &str =
  "authorization";

const PATH_SEGMENT_ENCODE_SET: &AsciiSet =
  &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn trimmed_base(base: &str) -> &str {
  base.trim().trim_end_matches('/')
}

#[must_use]
pub fn lists_url(base: &str) -> String {
  format!("{}/lists", trimmed_base(base))
}

#[must_use]
pub fn tasks_url(
  base: &str,
  list_id: &str
) -> String {
  format!(
    "{}/lists/{}/tasks",
    trimmed_base(base),
    utf8_percent_encode(
      list_id,
      PATH_SEGMENT_ENCODE_SET
    )
  )
}

#[must_use]
pub fn bearer(token: &str) -> String {
  format!("Bearer {token}")
}
