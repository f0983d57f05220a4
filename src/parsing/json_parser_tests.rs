#[cfg(test)]
mod tests {
    use crate::core::domain::{Chamber, Gender};
    use crate::core::error::MalformedRecordError;
    use crate::parsing::json_parser::{
        normalize_person, parse_person_records, read_person_records,
    };
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(json_str: &str) -> Value {
        serde_json::from_str(json_str).expect("test fixture must be valid JSON")
    }

    /// Test normalizing a complete single-term record
    #[test]
    fn test_normalize_single_term() {
        let person = record(
            r#"{
                "id": { "bioguide": "B000226" },
                "name": { "first": "Richard", "last": "Bassett" },
                "bio": { "birthday": "1745-04-02", "gender": "M" },
                "terms": [
                    {
                        "type": "sen",
                        "start": "1789-03-04",
                        "end": "1793-03-03",
                        "party": "Anti-Administration"
                    }
                ]
            }"#,
        );

        let rows = normalize_person(&person).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.name, "Richard Bassett");
        assert_eq!(row.birthday.as_deref(), Some("1745-04-02"));
        assert_eq!(row.gender, Gender::Male);
        assert_eq!(row.term_start, "1789-03-04");
        assert_eq!(row.term_end, "1793-03-03");
        assert_eq!(row.chamber, Chamber::Senate);
        assert_eq!(row.party.as_deref(), Some("Anti-Administration"));
    }

    /// Test that identity fields replicate across every term row
    #[test]
    fn test_normalize_multiple_terms_replicates_identity() {
        let person = record(
            r#"{
                "name": { "first": "Margaret", "last": "Chase Smith" },
                "bio": { "birthday": "1897-12-14", "gender": "F" },
                "terms": [
                    { "type": "rep", "start": "1940-06-03", "end": "1949-01-03", "party": "Republican" },
                    { "type": "sen", "start": "1949-01-03", "end": "1955-01-03", "party": "Republican" },
                    { "type": "sen", "start": "1955-01-03", "end": "1961-01-03", "party": "Republican" }
                ]
            }"#,
        );

        let rows = normalize_person(&person).unwrap();
        assert_eq!(rows.len(), 3);

        for row in &rows {
            assert_eq!(row.name, "Margaret Chase Smith");
            assert_eq!(row.birthday.as_deref(), Some("1897-12-14"));
            assert_eq!(row.gender, Gender::Female);
        }
        assert_eq!(rows[0].chamber, Chamber::House);
        assert_eq!(rows[1].chamber, Chamber::Senate);
        assert_eq!(rows[0].term_start, "1940-06-03");
        assert_eq!(rows[2].term_end, "1961-01-03");
    }

    /// Test that an absent birthday is carried as None, not an error
    #[test]
    fn test_missing_birthday_is_not_an_error() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "gender": "M" },
                "terms": [
                    { "type": "rep", "start": "1801-03-04", "end": "1803-03-03" }
                ]
            }"#,
        );

        let rows = normalize_person(&person).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].birthday, None);
        assert_eq!(rows[0].party, None);
    }

    /// Test that a missing gender fails the whole record
    #[test]
    fn test_missing_gender_fails() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "birthday": "1770-01-01" },
                "terms": []
            }"#,
        );

        let err = normalize_person(&person).unwrap_err();
        assert_eq!(
            err,
            MalformedRecordError::MissingField("bio.gender".to_string())
        );
    }

    #[test]
    fn test_missing_first_name_fails() {
        let person = record(
            r#"{
                "name": { "last": "Doe" },
                "bio": { "gender": "M" },
                "terms": []
            }"#,
        );

        let err = normalize_person(&person).unwrap_err();
        assert_eq!(
            err,
            MalformedRecordError::MissingField("name.first".to_string())
        );
    }

    #[test]
    fn test_unknown_gender_code_fails() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "gender": "X" },
                "terms": []
            }"#,
        );

        let err = normalize_person(&person).unwrap_err();
        assert_eq!(err, MalformedRecordError::UnknownGender("X".to_string()));
    }

    #[test]
    fn test_unknown_chamber_code_fails() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "gender": "M" },
                "terms": [
                    { "type": "gov", "start": "1801-03-04", "end": "1803-03-03" }
                ]
            }"#,
        );

        let err = normalize_person(&person).unwrap_err();
        assert_eq!(err, MalformedRecordError::UnknownChamber("gov".to_string()));
    }

    /// Test that a missing terms key fails while an empty array does not
    #[test]
    fn test_missing_terms_key_fails() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "gender": "M" }
            }"#,
        );

        let err = normalize_person(&person).unwrap_err();
        assert_eq!(err, MalformedRecordError::MissingField("terms".to_string()));
    }

    #[test]
    fn test_empty_terms_produce_zero_rows() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "gender": "M" },
                "terms": []
            }"#,
        );

        let rows = normalize_person(&person).unwrap();
        assert!(rows.is_empty());
    }

    /// Test that the failing term's index shows up in the field path
    #[test]
    fn test_missing_term_field_reports_index() {
        let person = record(
            r#"{
                "name": { "first": "John", "last": "Doe" },
                "bio": { "gender": "M" },
                "terms": [
                    { "type": "rep", "start": "1801-03-04", "end": "1803-03-03" },
                    { "type": "rep", "start": "1803-03-04" }
                ]
            }"#,
        );

        let err = normalize_person(&person).unwrap_err();
        assert_eq!(
            err,
            MalformedRecordError::MissingField("terms[1].end".to_string())
        );
    }

    /// Test that a record with the wrong JSON shape fails per record
    #[test]
    fn test_non_object_record_fails_shape() {
        let err = normalize_person(&json!(42)).unwrap_err();
        assert!(matches!(err, MalformedRecordError::InvalidShape(_)));

        let err = normalize_person(&json!({ "name": "not an object" })).unwrap_err();
        assert!(matches!(err, MalformedRecordError::InvalidShape(_)));
    }

    #[test]
    fn test_parse_person_records_array() {
        let json = r#"[
            { "name": { "first": "A", "last": "B" } },
            { "name": { "first": "C", "last": "D" } }
        ]"#;

        let records = parse_person_records(json).unwrap();
        assert_eq!(records.len(), 2);
    }

    /// Test that a non-array file is a fatal structural error
    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_person_records(r#"{ "name": "nope" }"#).unwrap_err();
        assert!(
            err.to_string().contains("person records"),
            "got: {}",
            err
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_person_records("[{").is_err());
    }

    /// Test that trailing content after the array is a fatal structural error
    #[test]
    fn test_parse_rejects_trailing_content() {
        let err = parse_person_records("[] this is not json").unwrap_err();
        assert!(
            err.to_string().contains("person records"),
            "got: {}",
            err
        );
    }

    /// Test that a second JSON document after the array fails the parse
    /// instead of being silently dropped
    #[test]
    fn test_parse_rejects_concatenated_documents() {
        let json = r#"[
            {
                "name": { "first": "Richard", "last": "Bassett" },
                "bio": { "birthday": "1745-04-02", "gender": "M" },
                "terms": [
                    { "type": "sen", "start": "1789-03-04", "end": "1793-03-03" }
                ]
            }
        ]
        { "second": "document" }"#;

        assert!(parse_person_records(json).is_err());
    }

    /// Test reading records from an actual file
    #[test]
    fn test_read_person_records_from_file() {
        let json = r#"[
            {
                "name": { "first": "Richard", "last": "Bassett" },
                "bio": { "birthday": "1745-04-02", "gender": "M" },
                "terms": [
                    { "type": "sen", "start": "1789-03-04", "end": "1793-03-03" }
                ]
            }
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();

        let records = read_person_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);

        let rows = normalize_person(&records[0]).unwrap();
        assert_eq!(rows[0].name, "Richard Bassett");
    }

    #[test]
    fn test_read_missing_file_mentions_path() {
        let err = read_person_records(std::path::Path::new("no-such-legislators.json"))
            .unwrap_err();
        assert!(
            err.to_string().contains("no-such-legislators.json"),
            "got: {}",
            err
        );
    }

    proptest! {
        /// Row count always equals the number of terms for a valid record
        #[test]
        fn prop_row_count_matches_term_count(
            first in "[A-Za-z]{1,12}",
            last in "[A-Za-z]{1,12}",
            term_count in 0usize..8,
        ) {
            let terms: Vec<Value> = (0..term_count)
                .map(|i| {
                    json!({
                        "type": if i % 2 == 0 { "rep" } else { "sen" },
                        "start": format!("{}-01-03", 1901 + i),
                        "end": format!("{}-01-03", 1903 + i),
                        "party": "Republican"
                    })
                })
                .collect();
            let person = json!({
                "name": { "first": first, "last": last },
                "bio": { "birthday": "1850-06-15", "gender": "F" },
                "terms": terms
            });

            let rows = normalize_person(&person).unwrap();
            prop_assert_eq!(rows.len(), term_count);
            let expected_name = format!("{} {}", first, last);
            for row in &rows {
                prop_assert_eq!(&row.name, &expected_name);
                prop_assert_eq!(row.birthday.as_deref(), Some("1850-06-15"));
                prop_assert_eq!(row.gender, Gender::Female);
            }
        }
    }
}
