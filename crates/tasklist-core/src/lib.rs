pub mod api;
pub mod config;
pub mod credentials;
pub mod datetime;
pub mod error;
pub mod filter;
pub mod home;
pub mod i18n;
pub mod roster;

pub use config::Config;
pub use datetime::{
  DateError,
  Remaining
};
pub use error::{
  FetchError,
  FetchFailure
};
pub use filter::DisplayFilter;
pub use home::{
  FetchTicket,
  HomeState
};
pub use i18n::Locale;
pub use roster::{
  NavKey,
  RosterError,
  TabRoster
};
pub use tasklist_shared::{
  ListRecord,
  TaskRecord,
  TasksResponse
};
