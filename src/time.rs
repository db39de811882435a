//! Time related utils.

use chrono::Utc;

/// The timestamp type used by this crate, always in UTC.
pub type Timestamp = chrono::DateTime<Utc>;

/// Get the current timestamp.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp into an http date: `Mon, 15 Aug 2022 16:50:12 GMT`.
pub fn format_http_date(t: Timestamp) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Wire rendering of the request timestamp.
///
/// The server recomputes the signature from the `Date` header it receives,
/// so the rendering chosen here must match what the deployment verifies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// The http date form, `Mon, 15 Aug 2022 16:50:12 GMT`. Current
    /// deployments verify against this.
    #[default]
    HttpDate,
    /// Legacy compact form with no separator between date and time,
    /// `2022-08-1516:50:12`.
    Compact,
}

impl TimestampFormat {
    /// Render `t` in this format.
    pub fn format(&self, t: Timestamp) -> String {
        match self {
            TimestampFormat::HttpDate => format_http_date(t),
            TimestampFormat::Compact => t.format("%Y-%m-%d%H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Timestamp {
        chrono::DateTime::parse_from_rfc2822("Mon, 15 Aug 2022 16:50:12 GMT")
            .expect("fixture date must parse")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(fixture()), "Mon, 15 Aug 2022 16:50:12 GMT");
    }

    #[test]
    fn test_format_http_date_pads_the_day() {
        let t = chrono::DateTime::parse_from_rfc2822("Sun, 06 Nov 1994 08:49:37 GMT")
            .expect("fixture date must parse")
            .with_timezone(&Utc);
        assert_eq!(format_http_date(t), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_timestamp_formats() {
        assert_eq!(
            TimestampFormat::HttpDate.format(fixture()),
            "Mon, 15 Aug 2022 16:50:12 GMT"
        );
        assert_eq!(TimestampFormat::Compact.format(fixture()), "2022-08-1516:50:12");
    }

    #[test]
    fn test_default_is_http_date() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::HttpDate);
    }
}
