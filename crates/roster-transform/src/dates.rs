//! Date value normalization.
//!
//! Applies only to columns whose canonical key signals a date semantic.
//! Two input shapes are recognized: year-first (`YYYY-M-D`, unambiguous
//! roles) and small-number-first (`N/N/YY` or `N/N/YYYY`, where day and
//! month are ambiguous). Separators may be `.`, `/`, or `-`; any trailing
//! time or text suffix is preserved verbatim.
//!
//! Day/month orientation is resolved by an explicit rule list evaluated
//! top-down, so the tie-break order is auditable and each rule is testable
//! on its own. Anything unrecognized or out of range passes through
//! unchanged; date normalization is never an error.

use tracing::trace;

use roster_map::normalize_key;

/// Canonical-key fragment marking a booking timestamp column.
pub const BOOKED_AT_KEY: &str = "bookedat";
/// Canonical key of birth-date columns (all aliases collapse to this).
pub const BIRTH_DATE_KEY: &str = "dateofbirth";

/// Which of day and month comes first in the resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    DayFirst,
    MonthFirst,
}

/// True when the column's canonical key signals a date semantic.
pub fn is_date_column(column: &str) -> bool {
    let key = normalize_key(column);
    key.contains("date") || key.contains(BOOKED_AT_KEY) || key == BIRTH_DATE_KEY
}

/// A recognized date value, before orientation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DateShape {
    /// `YYYY sep M sep D`: roles are fixed, only the output order is open.
    YearFirst {
        year: u32,
        month: u32,
        day: u32,
        suffix: String,
    },
    /// `N sep N sep YY|YYYY`: the two small numbers are day and month in
    /// an order the orientation rules must decide.
    SmallFirst {
        first: u32,
        second: u32,
        year: u32,
        suffix: String,
    },
}

struct RuleInput<'a> {
    /// Canonical key of the column being normalized.
    key: &'a str,
    /// The two ambiguous numbers, absent for year-first values.
    values: Option<(u32, u32)>,
}

type OrientationRule = fn(&RuleInput<'_>) -> Option<Orientation>;

/// A value >12 can only be the day; this outranks every name hint and
/// per-field default.
fn value_shape_rule(input: &RuleInput<'_>) -> Option<Orientation> {
    let (first, second) = input.values?;
    match (first > 12, second > 12) {
        (true, false) => Some(Orientation::DayFirst),
        (false, true) => Some(Orientation::MonthFirst),
        _ => None,
    }
}

/// Birth dates are day-first regardless of name hints.
fn birth_date_rule(input: &RuleInput<'_>) -> Option<Orientation> {
    input
        .key
        .contains(BIRTH_DATE_KEY)
        .then_some(Orientation::DayFirst)
}

/// An explicit `dd-mm`-style fragment in the column name.
fn day_first_hint_rule(input: &RuleInput<'_>) -> Option<Orientation> {
    input.key.contains("ddmm").then_some(Orientation::DayFirst)
}

/// An explicit `mm-dd`-style fragment in the column name.
fn month_first_hint_rule(input: &RuleInput<'_>) -> Option<Orientation> {
    input.key.contains("mmdd").then_some(Orientation::MonthFirst)
}

/// Fallback: booking timestamps and all remaining date columns are
/// month-first.
fn field_default_rule(_input: &RuleInput<'_>) -> Option<Orientation> {
    Some(Orientation::MonthFirst)
}

const ORIENTATION_RULES: &[(&str, OrientationRule)] = &[
    ("value-shape", value_shape_rule),
    ("birth-date", birth_date_rule),
    ("day-first-hint", day_first_hint_rule),
    ("month-first-hint", month_first_hint_rule),
    ("field-default", field_default_rule),
];

fn resolve_orientation(input: &RuleInput<'_>) -> Orientation {
    for (name, rule) in ORIENTATION_RULES {
        if let Some(orientation) = rule(input) {
            trace!(rule = %name, ?orientation, column_key = input.key, "orientation resolved");
            return orientation;
        }
    }
    // The field-default rule always answers.
    Orientation::MonthFirst
}

/// Reads a run of ASCII digits at the front of `s`, capped at `max` digits.
/// Returns the parsed value, the digit count, and the remaining input; a run
/// longer than `max` fails rather than truncating.
fn take_number(s: &str, max: usize) -> Option<(u32, usize, &str)> {
    let digits = s.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > max {
        return None;
    }
    let value = s[..digits].parse().ok()?;
    Some((value, digits, &s[digits..]))
}

fn take_separator(s: &str) -> Option<&str> {
    s.strip_prefix(['.', '/', '-'])
}

fn expand_two_digit_year(year: u32) -> u32 {
    if year >= 70 { 1900 + year } else { 2000 + year }
}

fn parse_shape(value: &str) -> Option<DateShape> {
    let (first, first_digits, rest) = take_number(value, 4)?;
    if first_digits == 3 {
        return None;
    }
    let rest = take_separator(rest)?;
    let (second, _, rest) = take_number(rest, 2)?;
    let rest = take_separator(rest)?;

    if first_digits == 4 {
        // Year-first: YYYY sep M sep D, day capped at two digits.
        let (day, _, suffix) = take_number(rest, 2)?;
        return Some(DateShape::YearFirst {
            year: first,
            month: second,
            day,
            suffix: suffix.to_string(),
        });
    }

    // Small-number-first: N sep N sep YY|YYYY.
    let (year, year_digits, suffix) = take_number(rest, 4)?;
    if year_digits != 2 && year_digits != 4 {
        return None;
    }
    let year = if year_digits == 2 {
        expand_two_digit_year(year)
    } else {
        year
    };
    Some(DateShape::SmallFirst {
        first,
        second,
        year,
        suffix: suffix.to_string(),
    })
}

fn in_range(day: u32, month: u32) -> bool {
    (1..=31).contains(&day) && (1..=12).contains(&month)
}

fn render(orientation: Orientation, day: u32, month: u32, year: u32, suffix: &str) -> String {
    match orientation {
        Orientation::DayFirst => format!("{day:02}/{month:02}/{year:04}{suffix}"),
        Orientation::MonthFirst => format!("{month:02}/{day:02}/{year:04}{suffix}"),
    }
}

/// Normalizes a cell value for output under the given template column.
///
/// Non-date columns, unrecognized shapes, and out-of-range day/month values
/// all return the raw value unchanged.
pub fn format_output_value(column: &str, raw: &str) -> String {
    if !is_date_column(column) {
        return raw.to_string();
    }
    let Some(shape) = parse_shape(raw) else {
        return raw.to_string();
    };
    let key = normalize_key(column);

    match shape {
        DateShape::YearFirst {
            year,
            month,
            day,
            suffix,
        } => {
            if !in_range(day, month) {
                return raw.to_string();
            }
            let input = RuleInput {
                key: &key,
                values: None,
            };
            render(resolve_orientation(&input), day, month, year, &suffix)
        }
        DateShape::SmallFirst {
            first,
            second,
            year,
            suffix,
        } => {
            let input = RuleInput {
                key: &key,
                values: Some((first, second)),
            };
            let orientation = resolve_orientation(&input);
            let (day, month) = match orientation {
                Orientation::DayFirst => (first, second),
                Orientation::MonthFirst => (second, first),
            };
            if !in_range(day, month) {
                return raw.to_string();
            }
            render(orientation, day, month, year, &suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_date_columns_by_canonical_key() {
        assert!(is_date_column("Start Date"));
        assert!(is_date_column("Booked At"));
        assert!(is_date_column("booked_at_time"));
        assert!(is_date_column("DOB"));
        assert!(is_date_column("Date of Birth"));
        assert!(!is_date_column("shirt_size"));
        assert!(!is_date_column("Email"));
    }

    #[test]
    fn parses_year_first_shape() {
        assert_eq!(
            parse_shape("2024-03-05"),
            Some(DateShape::YearFirst {
                year: 2024,
                month: 3,
                day: 5,
                suffix: String::new(),
            })
        );
        assert_eq!(
            parse_shape("2024/3/5 14:30"),
            Some(DateShape::YearFirst {
                year: 2024,
                month: 3,
                day: 5,
                suffix: " 14:30".to_string(),
            })
        );
    }

    #[test]
    fn parses_small_first_shape_with_year_expansion() {
        assert_eq!(
            parse_shape("05/03/24"),
            Some(DateShape::SmallFirst {
                first: 5,
                second: 3,
                year: 2024,
                suffix: String::new(),
            })
        );
        assert_eq!(
            parse_shape("05.03.71"),
            Some(DateShape::SmallFirst {
                first: 5,
                second: 3,
                year: 1971,
                suffix: String::new(),
            })
        );
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert_eq!(parse_shape("not a date"), None);
        assert_eq!(parse_shape("2024-03"), None);
        assert_eq!(parse_shape("123-01-02"), None);
        assert_eq!(parse_shape("05/03/202"), None);
        assert_eq!(parse_shape("2024-03-051"), None);
        assert_eq!(parse_shape(""), None);
    }

    #[test]
    fn value_over_12_is_the_day_regardless_of_hints() {
        // First number >12: day-first even under a month-first hint.
        assert_eq!(
            format_output_value("Start Date (mm/dd/yyyy)", "13/02/2024"),
            "13/02/2024"
        );
        // Second number >12: month-first even for a birth date.
        assert_eq!(
            format_output_value("Date of Birth", "02/13/2024"),
            "02/13/2024"
        );
    }

    #[test]
    fn birth_dates_default_day_first() {
        assert_eq!(format_output_value("DOB", "2024-03-05"), "05/03/2024");
        assert_eq!(format_output_value("Date of Birth", "05/03/2024"), "05/03/2024");
    }

    #[test]
    fn booked_at_defaults_month_first() {
        assert_eq!(format_output_value("Booked At", "2024-03-05"), "03/05/2024");
        assert_eq!(
            format_output_value("Booked At", "2024-03-05 09:15"),
            "03/05/2024 09:15"
        );
    }

    #[test]
    fn name_hints_steer_ambiguous_values() {
        assert_eq!(
            format_output_value("Start Date (dd/mm/yyyy)", "05/03/2024"),
            "05/03/2024"
        );
        assert_eq!(
            format_output_value("Start Date (mm/dd/yyyy)", "5/3/2024"),
            "05/03/2024"
        );
    }

    #[test]
    fn out_of_range_values_pass_through() {
        assert_eq!(format_output_value("Start Date", "2024-13-05"), "2024-13-05");
        assert_eq!(format_output_value("Start Date", "32/14/2024"), "32/14/2024");
        assert_eq!(format_output_value("Start Date", "00/00/2024"), "00/00/2024");
    }

    #[test]
    fn non_date_columns_are_untouched() {
        assert_eq!(format_output_value("shirt_size", "05/03/2024"), "05/03/2024");
        assert_eq!(format_output_value("Email", "avery@example.com"), "avery@example.com");
    }

    #[test]
    fn two_digit_year_pivot() {
        assert_eq!(expand_two_digit_year(70), 1970);
        assert_eq!(expand_two_digit_year(99), 1999);
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(69), 2069);
    }
}
