use chrono::{DateTime, Duration, SecondsFormat, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Renders a `lastModified` stamp the way it is stored: UTC with a `Z` suffix.
pub fn format_stamp(stamp: DateTime<Utc>) -> String {
    stamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `now`, or one millisecond past the newest of `previous` when the clock has not moved past it.
///
/// At the top of chrono's range the newest stamp is reused.
pub fn next_stamp<I>(now: DateTime<Utc>, previous: I) -> DateTime<Utc>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    match previous.into_iter().max() {
        Some(latest) if now <= latest => latest
            .checked_add_signed(Duration::milliseconds(1))
            .unwrap_or(latest),
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn next_stamp_is_strictly_later() {
        let t = at("2023-07-14T16:04:00Z");
        assert_eq!(next_stamp(t, [t]), t + Duration::milliseconds(1));
        assert_eq!(next_stamp(t, [t - Duration::seconds(5)]), t);

        let future = t + Duration::days(1);
        assert!(next_stamp(t, [t, future]) > future);
        assert_eq!(next_stamp(t, std::iter::empty()), t);
    }

    #[test]
    fn next_stamp_saturates_at_max() {
        let t = at("2023-07-14T16:04:00Z");
        assert_eq!(next_stamp(t, [DateTime::<Utc>::MAX_UTC]), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn format_stamp_matches_stored_form() {
        assert_eq!(format_stamp(at("2023-07-12T11:30:00+02:00")), "2023-07-12T09:30:00Z");
        let t = at("2023-07-14T16:04:00Z") + Duration::milliseconds(1);
        assert_eq!(format_stamp(t), "2023-07-14T16:04:00.001Z");
    }
}
