use percent_encoding::percent_decode_str;

pub const DEFAULT_TOKEN_COOKIE: &str =
  "token";

#[must_use]
pub fn token_from_cookies(
  cookies: &str,
  name: &str
) -> Option<String> {
  let value = cookies
    .split(';')
    .filter_map(|pair| {
      pair.trim().split_once('=')
    })
    .find(|(key, _)| key.trim() == name)
    .map(|(_, value)| {
      value.trim().trim_matches('"')
    })?;

  let decoded =
    match percent_decode_str(value)
      .decode_utf8()
    {
      | Ok(decoded) => decoded.into_owned(),
      | Err(err) => {
        tracing::warn!(
          cookie = name,
          error = %err,
          "cookie value is not valid utf-8; using it undecoded"
        );
        value.to_string()
      }
    };

  if decoded.is_empty() {
    None
  } else {
    Some(decoded)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_token_among_other_cookies() {
    assert_eq!(
      token_from_cookies(
        "theme=dark; token=abc123;  lang=ja",
        DEFAULT_TOKEN_COOKIE
      )
      .as_deref(),
      Some("abc123")
    );
  }

  #[test]
  fn decodes_and_unquotes_values() {
    assert_eq!(
      token_from_cookies(
        "token=\"a%2Bb%3D\"",
        "token"
      )
      .as_deref(),
      Some("a+b=")
    );
  }

  #[test]
  fn missing_or_empty_token_is_none() {
    assert_eq!(
      token_from_cookies(
        "mytoken=abc",
        "token"
      ),
      None
    );
    assert_eq!(
      token_from_cookies("token=", "token"),
      None
    );
    assert_eq!(
      token_from_cookies("", "token"),
      None
    );
  }
}
