use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use tasklist_core::api::{
  AUTHORIZATION_HEADER,
  bearer,
  lists_url,
  tasks_url
};
use tasklist_core::{
  Config,
  FetchError,
  ListRecord,
  TaskRecord,
  TasksResponse
};

use crate::credentials::access_token;

async fn get_json<R>(
  config: &Config,
  url: &str
) -> Result<R, FetchError>
where
  R: DeserializeOwned
{
  let token =
    access_token(&config.token_cookie)
      .ok_or(FetchError::MissingToken)?;

  let response = Request::get(url)
    .header(
      AUTHORIZATION_HEADER,
      &bearer(&token)
    )
    .send()
    .await
    .map_err(|e| {
      FetchError::Network(e.to_string())
    })?;

  if let Some(err) =
    FetchError::from_status(
      response.status()
    )
  {
    return Err(err);
  }

  response.json::<R>().await.map_err(
    |e| FetchError::Decode(e.to_string())
  )
}

#[tracing::instrument(skip(config))]
pub async fn fetch_lists(
  config: &Config
) -> Result<Vec<ListRecord>, FetchError> {
  get_json(config, &lists_url(&config.api_base))
    .await
}

#[tracing::instrument(skip(config))]
pub async fn fetch_tasks(
  config: &Config,
  list_id: &str
) -> Result<Vec<TaskRecord>, FetchError> {
  get_json::<TasksResponse>(
    config,
    &tasks_url(&config.api_base, list_id)
  )
  .await
  .map(TasksResponse::into_tasks)
}
