#[cfg(test)]
mod tests {
    use super::super::dedup::*;
    use crate::schemas::Record;

    fn record(id: &str, message: Option<&str>, published: Option<&str>) -> Record {
        Record {
            id: id.to_string(),
            status_message: message.map(str::to_string),
            status_published: published.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_duplicate_pair_collapses_to_first() {
        let input = vec![
            record("1", Some("a"), Some("d1")),
            record("2", Some("a"), Some("d1")),
            record("3", Some("b"), Some("d1")),
        ];

        let output = dedup_records(&input);

        assert_eq!(ids(&output), vec!["1", "3"]);
    }

    #[test]
    fn test_same_message_different_date_is_kept() {
        let input = vec![
            record("1", Some("a"), Some("d1")),
            record("2", Some("a"), Some("d2")),
        ];

        assert_eq!(dedup_records(&input).len(), 2);
    }

    #[test]
    fn test_absent_fields_take_part_in_the_key() {
        let input = vec![
            record("1", None, Some("d1")),
            record("2", None, Some("d1")),
            record("3", None, Some("d2")),
            record("4", Some(""), Some("d1")),
            record("5", None, None),
            record("6", None, None),
        ];

        let output = dedup_records(&input);

        // Empty string and absent message are different values.
        assert_eq!(ids(&output), vec!["1", "3", "4", "5"]);
    }

    #[test]
    fn test_identifier_is_ignored() {
        let input = vec![
            record("same", Some("a"), Some("d1")),
            record("same", Some("b"), Some("d1")),
        ];

        assert_eq!(dedup_records(&input).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            record("1", Some("x"), Some("d1")),
            record("2", Some("y"), Some("d2")),
            record("3", Some("x"), Some("d1")),
            record("4", Some("z"), None),
            record("5", Some("y"), Some("d2")),
            record("6", Some("z"), None),
        ];

        let once = dedup_records(&input);
        let twice = dedup_records(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_ordered_subsequence_of_input() {
        let input: Vec<Record> = (0..30)
            .map(|i| {
                let message = format!("m{}", i % 7);
                let published = format!("d{}", i % 3);
                record(&i.to_string(), Some(&message), Some(&published))
            })
            .collect();

        let output = dedup_records(&input);

        let positions: Vec<usize> = output
            .iter()
            .map(|r| input.iter().position(|i| i.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        // 7 messages x 3 dates share a cycle of 21
        assert_eq!(output.len(), 21);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_records(&[]).is_empty());
    }
}
