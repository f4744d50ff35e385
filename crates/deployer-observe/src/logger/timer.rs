use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 UTC timestamps.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UtcRfc3339;

impl FormatTime for UtcRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts} "),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_utc_timestamp() {
        let mut buf = String::new();
        UtcRfc3339.format_time(&mut Writer::new(&mut buf)).unwrap();

        assert!(buf.trim_end().ends_with('Z'), "expected UTC suffix in {buf:?}");
    }
}
