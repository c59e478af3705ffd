use std::fmt::Display;

use chrono::{
  DateTime,
  LocalResult,
  NaiveDate,
  NaiveDateTime,
  NaiveTime,
  TimeZone,
  Utc
};

const LIMIT_DISPLAY_FORMAT: &str =
  "%Y/%m/%d %H:%M";

const OFFSET_LAYOUT: &str =
  "%Y-%m-%dT%H:%M%:z";
const ZULU_LAYOUT: &str =
  "%Y-%m-%dT%H:%MZ";

const NAIVE_LAYOUTS: [&str; 4] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M"
];

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum DateError {
  #[error("deadline is empty")]
  Empty,
  #[error(
    "unrecognised deadline `{0}`"
  )]
  Unparseable(String),
  #[error(
    "local time `{0}` does not exist \
     in the viewer's time zone"
  )]
  NonexistentLocalTime(String)
}

pub fn parse_limit<Tz: TimeZone>(
  raw: &str,
  tz: &Tz
) -> Result<DateTime<Utc>, DateError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(DateError::Empty);
  }

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(
      trimmed
    )
  {
    return Ok(dt.with_timezone(&Utc));
  }

  if let Ok(dt) = DateTime::parse_from_str(
    trimmed,
    OFFSET_LAYOUT
  ) {
    return Ok(dt.with_timezone(&Utc));
  }

  if let Ok(naive) =
    NaiveDateTime::parse_from_str(
      trimmed,
      ZULU_LAYOUT
    )
  {
    return Ok(naive.and_utc());
  }

  for layout in NAIVE_LAYOUTS {
    if let Ok(naive) =
      NaiveDateTime::parse_from_str(
        trimmed, layout
      )
    {
      return localize(naive, tz);
    }
  }

  if let Ok(date) =
    NaiveDate::parse_from_str(
      trimmed, "%Y-%m-%d"
    )
  {
    return Ok(
      date
        .and_time(NaiveTime::MIN)
        .and_utc()
    );
  }

  tracing::debug!(
    raw = %trimmed,
    "deadline did not match any known layout"
  );
  Err(DateError::Unparseable(
    trimmed.to_string()
  ))
}

fn localize<Tz: TimeZone>(
  naive: NaiveDateTime,
  tz: &Tz
) -> Result<DateTime<Utc>, DateError> {
  match tz.from_local_datetime(&naive) {
    | LocalResult::Single(dt) => {
      Ok(dt.with_timezone(&Utc))
    }
    | LocalResult::Ambiguous(
      earliest,
      _
    ) => Ok(earliest.with_timezone(&Utc)),
    | LocalResult::None => {
      Err(
        DateError::NonexistentLocalTime(
          naive.to_string()
        )
      )
    }
  }
}

#[must_use]
pub fn format_limit<Tz>(
  instant: DateTime<Utc>,
  tz: &Tz
) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display
{
  instant
    .with_timezone(tz)
    .format(LIMIT_DISPLAY_FORMAT)
    .to_string()
}

#[must_use]
pub fn display_limit<Tz>(
  raw: &str,
  tz: &Tz
) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display
{
  match parse_limit(raw, tz) {
    | Ok(instant) => {
      format_limit(instant, tz)
    }
    | Err(err) => {
      tracing::warn!(
        raw,
        error = %err,
        "showing unparsed deadline"
      );
      raw.to_string()
    }
  }
}

// Floored quotients over truncating
// remainders, never clamped: 90 minutes
// overdue is -1d -2h -30m.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct Remaining {
  pub days:    i64,
  pub hours:   i64,
  pub minutes: i64
}

impl Remaining {
  #[must_use]
  pub fn from_millis(
    delta: i64
  ) -> Self {
    Self {
      days:    delta
        .div_euclid(MS_PER_DAY),
      hours:   (delta % MS_PER_DAY)
        .div_euclid(MS_PER_HOUR),
      minutes: (delta % MS_PER_HOUR)
        .div_euclid(MS_PER_MINUTE)
    }
  }

  #[must_use]
  pub fn between(
    deadline: DateTime<Utc>,
    now: DateTime<Utc>
  ) -> Self {
    Self::from_millis(
      (deadline - now)
        .num_milliseconds()
    )
  }

  #[must_use]
  pub fn as_millis(&self) -> i64 {
    self.days * MS_PER_DAY
      + self.hours * MS_PER_HOUR
      + self.minutes * MS_PER_MINUTE
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    Duration,
    FixedOffset,
    TimeZone,
    Utc
  };
  use chrono_tz::Asia::Tokyo;
  use chrono_tz::Europe::Berlin;

  use super::*;

  fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600)
      .expect("valid offset")
  }

  #[test]
  fn formats_local_wall_clock_time() {
    let instant =
      parse_limit("2024-03-05T09:07:00", &Tokyo)
        .expect("parse local time");
    assert_eq!(
      format_limit(instant, &Tokyo),
      "2024/03/05 09:07"
    );
  }

  #[test]
  fn formats_utc_deadline_in_viewer_zone(
  ) {
    let instant = parse_limit(
      "2024-12-31T15:30:00Z",
      &Utc
    )
    .expect("parse rfc3339");
    assert_eq!(
      format_limit(instant, &jst()),
      "2025/01/01 00:30"
    );
  }

  #[test]
  fn pads_single_digit_fields() {
    let instant = Utc
      .with_ymd_and_hms(
        987, 1, 2, 3, 4, 0
      )
      .single()
      .expect("valid instant");
    assert_eq!(
      format_limit(instant, &Utc),
      "0987/01/02 03:04"
    );
  }

  #[test]
  fn bare_date_is_midnight_utc() {
    let instant =
      parse_limit("2024-03-05", &Tokyo)
        .expect("parse bare date");
    assert_eq!(
      format_limit(instant, &Tokyo),
      "2024/03/05 09:00"
    );
  }

  #[test]
  fn accepts_space_separated_and_short_times(
  ) {
    let spaced = parse_limit(
      "2024-03-05 09:07:30",
      &Utc
    )
    .expect("parse spaced");
    let short = parse_limit(
      "2024-03-05T09:07",
      &Utc
    )
    .expect("parse short");
    assert_eq!(
      format_limit(spaced, &Utc),
      "2024/03/05 09:07"
    );
    assert_eq!(spaced - short, Duration::seconds(30));
  }

  #[test]
  fn accepts_offsets_without_seconds() {
    let zulu =
      parse_limit("2024-03-05T09:07Z", &Tokyo)
        .expect("parse zulu");
    let offset = parse_limit(
      "2024-03-05T09:07+09:00",
      &Utc
    )
    .expect("parse offset");
    assert_eq!(
      format_limit(zulu, &Utc),
      "2024/03/05 09:07"
    );
    assert_eq!(
      format_limit(offset, &Utc),
      "2024/03/05 00:07"
    );
    assert_eq!(
      display_limit("2024-03-05T09:07Z", &Utc),
      "2024/03/05 09:07"
    );
  }

  #[test]
  fn rejects_garbage_and_empty_input() {
    assert_eq!(
      parse_limit("   ", &Utc),
      Err(DateError::Empty)
    );
    assert_eq!(
      parse_limit("next tuesday", &Utc),
      Err(DateError::Unparseable(
        "next tuesday".to_string()
      ))
    );
    assert_eq!(
      display_limit("soon", &Utc),
      "soon"
    );
  }

  #[test]
  fn skipped_local_time_is_an_error() {
    let result = parse_limit(
      "2024-03-31T02:30:00",
      &Berlin
    );
    assert!(matches!(
      result,
      Err(
        DateError::NonexistentLocalTime(_)
      )
    ));
  }

  #[test]
  fn future_deadline_decomposes_into_bounded_units(
  ) {
    let now = Utc
      .with_ymd_and_hms(
        2024, 3, 5, 9, 0, 0
      )
      .single()
      .expect("valid now");
    let deadline = now
      + Duration::days(2)
      + Duration::hours(5)
      + Duration::minutes(7)
      + Duration::seconds(59);
    let remaining =
      Remaining::between(deadline, now);
    assert_eq!(
      remaining,
      Remaining {
        days:    2,
        hours:   5,
        minutes: 7
      }
    );
  }

  #[test]
  fn non_negative_deltas_satisfy_the_floor_bounds(
  ) {
    let samples = [
      0_i64,
      1,
      59_999,
      60_000,
      3_599_999,
      3_600_000,
      86_399_999,
      86_400_000,
      123_456_789,
      9_876_543_210
    ];
    for delta in samples {
      let r = Remaining::from_millis(delta);
      assert!(r.days >= 0, "{delta}");
      assert!(
        (0..=23).contains(&r.hours),
        "{delta}"
      );
      assert!(
        (0..=59).contains(&r.minutes),
        "{delta}"
      );
      assert!(r.as_millis() <= delta);
      assert!(delta < r.as_millis() + 60_000);
    }
  }

  #[test]
  fn overdue_by_ninety_minutes() {
    let r = Remaining::from_millis(
      -90 * 60_000
    );
    assert_eq!(
      r,
      Remaining {
        days:    -1,
        hours:   -2,
        minutes: -30
      }
    );
  }

  #[test]
  fn overdue_by_exactly_one_hour() {
    let r =
      Remaining::from_millis(-3_600_000);
    assert_eq!(
      (r.days, r.hours, r.minutes),
      (-1, -1, 0)
    );
  }

  #[test]
  fn overdue_by_a_few_seconds_is_minus_one_minute(
  ) {
    let r = Remaining::from_millis(-5_000);
    assert_eq!(
      (r.days, r.hours, r.minutes),
      (-1, -1, -1)
    );
  }
}
