#![forbid(unsafe_code)]

use time::OffsetDateTime;
use time::macros::format_description;

/// Today's calendar date as the `YYYY-MM-DD` string the records store.
pub(crate) fn today() -> String {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .date()
        .format(format)
        .unwrap_or_else(|_| "1970-01-01".to_string())
}
