use chrono::{DateTime, LocalResult, NaiveDateTime};
use chrono_tz::Tz;

use crate::errors::AppError;

/// Turn a caller-supplied ISO-8601 datetime string into an instant in the
/// reference timezone.
///
/// The voice front end normally sends naive local times
/// (`2023-04-25T14:00:00`); those get the reference timezone attached. A
/// string that already carries an offset is treated as authoritative and
/// converted, preserving the instant, rather than having its offset
/// silently discarded.
pub fn localize_slot(raw: &str, tz: Tz) -> Result<DateTime<Tz>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&tz));
    }

    let naive: NaiveDateTime = raw
        .parse()
        .map_err(|e: chrono::ParseError| AppError::InvalidTimeFormat(e.to_string()))?;

    match naive.and_local_timezone(tz) {
        LocalResult::Single(dt) => Ok(dt),
        // Fall-back hour: both offsets are valid, take the earlier one.
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(AppError::InvalidTimeFormat(format!(
            "{raw} does not exist in {tz} (skipped by daylight saving)"
        ))),
    }
}
