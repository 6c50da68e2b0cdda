//! Release-date normalisation for display.
//!
//! TMDB dates are usually `YYYY-MM-DD` but hand-entered records occasionally
//! use `DD-MM-YYYY`. Both render as `15 September 2025`; anything else
//! renders as [`NOT_AVAILABLE`].

use chrono::NaiveDate;

/// Placeholder rendered for missing or unparseable dates.
pub const NOT_AVAILABLE: &str = "N/A";

/// Accepted input layouts, tried in order, each with the index of its
/// four-digit year among the dash-separated fields.
const INPUT_FORMATS: [(&str, usize); 2] = [("%Y-%m-%d", 0), ("%d-%m-%Y", 2)];

const DISPLAY_FORMAT: &str = "%d %B %Y";

/// Formats a raw release date as `DD MonthName YYYY`.
///
/// Never fails: empty, `"N/A"`, `"None"`, absent and unparseable inputs all
/// yield `"N/A"`.
#[must_use]
pub fn format_release_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !matches!(*s, "" | NOT_AVAILABLE | "None")) else {
        return NOT_AVAILABLE.to_string();
    };

    INPUT_FORMATS
        .iter()
        .find_map(|&(fmt, year_field)| parse_strict(raw, fmt, year_field))
        .map_or_else(
            || NOT_AVAILABLE.to_string(),
            |date| date.format(DISPLAY_FORMAT).to_string(),
        )
}

/// Parses `raw` against `fmt` only if it is three dash-separated runs of
/// ASCII digits with exactly four in the year field. chrono alone would
/// accept signed years, longer years and leading whitespace.
fn parse_strict(raw: &str, fmt: &str, year_field: usize) -> Option<NaiveDate> {
    let fields: Vec<&str> = raw.split('-').collect();
    let well_formed = fields.len() == 3
        && fields
            .iter()
            .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
        && fields[year_field].len() == 4;
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(raw, fmt).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_release_date(Some("2025-09-15")), "15 September 2025");
    }

    #[test]
    fn formats_day_first_dates() {
        assert_eq!(format_release_date(Some("15-09-2025")), "15 September 2025");
    }

    #[test]
    fn pads_single_digit_days() {
        assert_eq!(format_release_date(Some("2001-03-05")), "05 March 2001");
    }

    #[test]
    fn placeholders_render_as_not_available() {
        for raw in [None, Some(""), Some("N/A"), Some("None")] {
            assert_eq!(format_release_date(raw), "N/A", "input: {raw:?}");
        }
    }

    #[test]
    fn unparseable_input_renders_as_not_available() {
        assert_eq!(format_release_date(Some("garbage")), "N/A");
        assert_eq!(format_release_date(Some("2025")), "N/A");
        assert_eq!(format_release_date(Some("2025-02-30")), "N/A");
        assert_eq!(format_release_date(Some("2025/09/15")), "N/A");
    }

    #[test]
    fn signs_whitespace_and_long_years_render_as_not_available() {
        for raw in [
            " 2025-09-15",
            "2025-09-15 ",
            "+2025-09-15",
            "-2025-09-15",
            "2025- 09-15",
            "15-09-+2025",
            "20250-09-15",
            "15-09-20250",
            "0925-09-15-1",
        ] {
            assert_eq!(format_release_date(Some(raw)), "N/A", "input: {raw:?}");
        }
    }
}
