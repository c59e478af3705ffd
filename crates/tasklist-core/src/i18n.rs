use serde::{
  Deserialize,
  Serialize
};

use crate::datetime::Remaining;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  Ja,
  En
}

#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
  pub app_title:          &'static str,
  pub lists_heading:      &'static str,
  pub new_list:           &'static str,
  pub edit_selected_list: &'static str,
  pub tasks_heading:      &'static str,
  pub new_task:           &'static str,
  pub todo:               &'static str,
  pub done:               &'static str,
  pub lists_fetch_failed: &'static str,
  pub tasks_fetch_failed: &'static str,
  pub page_not_ready:     &'static str
}

static JA: Messages = Messages {
  app_title:          "Todoアプリ",
  lists_heading:      "リスト一覧",
  new_list:           "リスト新規作成",
  edit_selected_list:
    "選択中のリストを編集",
  tasks_heading:      "タスク一覧",
  new_task:           "タスク新規作成",
  todo:               "未完了",
  done:               "完了",
  lists_fetch_failed:
    "リストの取得に失敗しました。",
  tasks_fetch_failed:
    "タスクの取得に失敗しました。",
  page_not_ready:
    "このページはまだ用意されていません。"
};

static EN: Messages = Messages {
  app_title:          "Todo",
  lists_heading:      "Lists",
  new_list:           "New list",
  edit_selected_list:
    "Edit selected list",
  tasks_heading:      "Tasks",
  new_task:           "New task",
  todo:               "Open",
  done:               "Done",
  lists_fetch_failed:
    "Failed to fetch lists. ",
  tasks_fetch_failed:
    "Failed to fetch tasks. ",
  page_not_ready:
    "This page is not available yet."
};

impl Locale {
  pub fn parse(
    raw: &str
  ) -> Option<Self> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "ja" | "ja-jp" => Some(Self::Ja),
      | "en" | "en-us" | "en-gb" => {
        Some(Self::En)
      }
      | _ => None
    }
  }

  #[must_use]
  pub fn messages(
    self
  ) -> &'static Messages {
    match self {
      | Self::Ja => &JA,
      | Self::En => &EN
    }
  }

  #[must_use]
  pub fn status_label(
    self,
    done: bool
  ) -> &'static str {
    let messages = self.messages();
    if done {
      messages.done
    } else {
      messages.todo
    }
  }

  #[must_use]
  pub fn remaining(
    self,
    remaining: &Remaining
  ) -> String {
    let Remaining {
      days,
      hours,
      minutes
    } = *remaining;
    match self {
      | Self::Ja => format!(
        "（残り{days}日{hours}時間{minutes}分）"
      ),
      | Self::En => format!(
        "(remaining {days} days {hours} \
         hours {minutes} minutes)"
      )
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_all_components_literally() {
    let overdue =
      Remaining::from_millis(
        -90 * 60_000
      );
    assert_eq!(
      Locale::Ja.remaining(&overdue),
      "（残り-1日-2時間-30分）"
    );
    assert_eq!(
      Locale::En.remaining(&overdue),
      "(remaining -1 days -2 hours -30 \
       minutes)"
    );
  }

  #[test]
  fn parses_locale_tags() {
    assert_eq!(
      Locale::parse(" EN "),
      Some(Locale::En)
    );
    assert_eq!(
      Locale::parse("ja-JP"),
      Some(Locale::Ja)
    );
    assert_eq!(Locale::parse("fr"), None);
  }

  #[test]
  fn status_label_follows_done_flag() {
    assert_eq!(
      Locale::Ja.status_label(true),
      "完了"
    );
    assert_eq!(
      Locale::Ja.status_label(false),
      "未完了"
    );
  }
}
