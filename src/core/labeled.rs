use crate::domain::model::PersonInfo;
use crate::utils::error::{PersonError, Result};
use std::str::FromStr;

const LABELS: [&str; 5] = ["First Name:", "Last Name:", "Age:", "Checking:", "Savings:"];

fn format_error(line: usize, message: String) -> PersonError {
    PersonError::LabeledFormat { line, message }
}

fn parse_number<T: FromStr>(line: usize, field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| format_error(line, format!("invalid {} value {:?}", field, value)))
}

/// Recovers records from text written by [`PersonInfo::write_to`] or
/// [`crate::core::stream::write_all`].
///
/// Blank lines are ignored. Every block must list the five labels in order.
/// Name values are taken verbatim after the label, so they may contain spaces.
pub fn parse_labeled(text: &str) -> Result<Vec<PersonInfo>> {
    let mut records = Vec::new();
    let mut current = PersonInfo::new();
    let mut expected = 0usize;
    let mut last_line = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;

        if line.trim().is_empty() {
            continue;
        }

        let label = LABELS[expected];
        let value = match line.strip_prefix(label) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => {
                return Err(format_error(
                    line_no,
                    format!("expected {:?}, found {:?}", label, line),
                ))
            }
        };

        match expected {
            0 => current.set_first_name(value),
            1 => current.set_last_name(value),
            2 => current.set_age(parse_number(line_no, "age", value)?),
            3 => current.set_checking(parse_number(line_no, "checking", value)?),
            _ => current.set_savings(parse_number(line_no, "savings", value)?),
        }

        expected += 1;
        if expected == LABELS.len() {
            records.push(std::mem::take(&mut current));
            expected = 0;
        }
    }

    if expected != 0 {
        return Err(format_error(
            last_line,
            format!("record ends before {:?}", LABELS[expected]),
        ));
    }

    tracing::debug!(count = records.len(), "parsed labeled records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stream::write_all;

    #[test]
    fn test_round_trip_through_write_to() {
        let person = PersonInfo::with_values("John", "Smith", 30, 1500.50, 2300.75);
        let mut out = Vec::new();
        person.write_to(&mut out).unwrap();

        let parsed = parse_labeled(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(parsed, vec![person]);
    }

    #[test]
    fn test_round_trip_many_with_awkward_values() {
        let records = vec![
            PersonInfo::new(),
            PersonInfo::with_values("Mary Ann", "van der Berg", -2, 0.1 + 0.2, -1e-7),
            PersonInfo::with_values("Li", "Wei", i32::MAX, 123456789.123, 1e300),
        ];
        let mut out = Vec::new();
        write_all(&mut out, &records).unwrap();

        let parsed = parse_labeled(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_crlf_and_missing_value_space() {
        let text = "First Name: A\r\nLast Name:B\r\nAge: 3\r\nChecking: 4\r\nSavings: 5\r\n";
        let parsed = parse_labeled(text).unwrap();
        assert_eq!(parsed, vec![PersonInfo::with_values("A", "B", 3, 4.0, 5.0)]);
    }

    #[test]
    fn test_out_of_order_label() {
        let text = "\nFirst Name: A\nAge: 3\n";
        let err = parse_labeled(text).unwrap_err();
        assert!(matches!(err, PersonError::LabeledFormat { line: 3, .. }));
    }

    #[test]
    fn test_bad_number_and_truncated_block() {
        let text = "First Name: A\nLast Name: B\nAge: old\n";
        assert!(matches!(
            parse_labeled(text),
            Err(PersonError::LabeledFormat { line: 3, .. })
        ));

        let text = "First Name: A\nLast Name: B\nAge: 3\n";
        let err = parse_labeled(text).unwrap_err();
        assert!(err.to_string().contains("Checking:"));
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_labeled("").unwrap().is_empty());
        assert!(parse_labeled("\n\n").unwrap().is_empty());
    }
}
