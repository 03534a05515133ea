use chrono::{DateTime, Local, NaiveDate, Utc};

/// Converts a UTC instant to the server-local calendar date.
///
/// This is the single source of truth for deriving a business date from a
/// timestamp. Due-ness checks and materialized occurrence dates all go
/// through here, so a template is never evaluated against one date and
/// stamped with another.
pub fn local_date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Convenience function for the current server-local date.
pub fn local_date_today() -> NaiveDate {
    local_date_from_utc(Utc::now())
}

/// Duration from `now` until the next local midnight.
///
/// Falls back to a flat 24 hours if the next calendar day cannot be
/// represented (should not happen for typical clock values).
pub fn until_next_midnight(now: DateTime<Local>) -> std::time::Duration {
    let next_midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|dt| dt.and_local_timezone(Local).earliest());

    match next_midnight {
        Some(midnight) => (midnight - now).to_std().unwrap_or_default(),
        None => std::time::Duration::from_secs(24 * 60 * 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_until_next_midnight_is_positive_and_bounded() {
        let now = Local::now();
        let wait = until_next_midnight(now);
        assert!(wait <= std::time::Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn test_until_next_midnight_near_end_of_day() {
        let late = Local
            .with_ymd_and_hms(2025, 3, 10, 23, 59, 0)
            .single()
            .expect("valid local time");
        let wait = until_next_midnight(late);
        assert!(wait <= std::time::Duration::from_secs(60));
    }

    #[test]
    fn test_local_date_roundtrip_matches_today() {
        let today = local_date_today();
        assert_eq!(local_date_from_utc(Utc::now()), today);
    }
}
