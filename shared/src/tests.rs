#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::error::PollError;
    use crate::models::{CreatePollRequest, OptionMap, Poll, PollData};
    use crate::validation::{validate_poll_request, ValidationError};

    fn request(question: &str, options: &[&str]) -> CreatePollRequest {
        CreatePollRequest {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn poll(options: &[&str]) -> Poll {
        Poll::new("poll-1", request("Q", options))
    }

    fn validate(body: Value) -> Result<CreatePollRequest, ValidationError> {
        validate_poll_request(Some(&body))
    }

    #[test]
    fn test_new_poll_starts_at_zero() {
        let p = poll(&["A", "B"]);
        let data = p.data();
        assert_eq!(data.question, "Q");
        assert_eq!(data.votes, OptionMap(vec![0, 0]));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"question": "Q", "options": {"0": "A", "1": "B"}, "votes": {"0": 0, "1": 0}})
        );
    }

    #[test]
    fn test_option_ids_cover_every_option() {
        for n in 2..12 {
            let texts: Vec<String> = (0..n).map(|i| format!("opt{}", i)).collect();
            let p = Poll::new("p", CreatePollRequest { question: "Q".into(), options: texts });
            let data = serde_json::to_value(p.data()).unwrap();
            let options = data["options"].as_object().unwrap();
            let votes = data["votes"].as_object().unwrap();
            assert_eq!(options.len(), n);
            assert_eq!(votes.len(), n);
            for i in 0..n {
                assert!(options.contains_key(&i.to_string()));
                assert_eq!(votes[&i.to_string()], json!(0));
            }
        }
    }

    #[test]
    fn test_record_vote_touches_one_counter() {
        let mut p = poll(&["A", "B", "C"]);
        assert_eq!(p.record_vote("1"), Ok(1));
        assert_eq!(p.votes_for("0"), Some(0));
        assert_eq!(p.votes_for("1"), Some(1));
        assert_eq!(p.votes_for("2"), Some(0));

        assert_eq!(p.record_vote("1"), Ok(2));
        assert_eq!(p.total_votes(), 2);
    }

    #[test]
    fn test_invalid_option_ids() {
        let mut p = poll(&["A", "B"]);
        for id in ["2", "-1", "01", "+1", " 1", "", "A", "1.0"] {
            assert!(matches!(p.record_vote(id), Err(PollError::InvalidOption(_))), "{id:?} accepted");
        }
        assert_eq!(p.total_votes(), 0);
    }

    #[test]
    fn test_results_keep_creation_order() {
        let options = ["zeta", "alpha", "mid", "beta", "a", "b", "c", "d", "e", "f", "g", "h"];
        let mut p = poll(&options);
        p.record_vote("10").unwrap();
        let results = p.results();
        let texts: Vec<_> = results.results.iter().map(|r| r.option.as_str()).collect();
        assert_eq!(texts, options);
        assert_eq!(results.results[10].votes, 1);
    }

    #[test]
    fn test_option_map_wire_round_trip() {
        let data = poll(&["A", "B", "C"]).data();
        let text = serde_json::to_string(&data).unwrap();
        let parsed: PollData = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, data);
        assert_eq!(parsed.options.get("2").map(String::as_str), Some("C"));
        assert!(!parsed.votes.is_empty());
        assert!(OptionMap::<u64>::default().is_empty());

        let gap: Result<OptionMap<u64>, _> = serde_json::from_value(json!({"0": 1, "2": 3}));
        assert!(gap.is_err());
    }

    #[test]
    fn test_validation_accepts_well_formed_request() {
        let parsed = validate(json!({"question": " Best language? ", "options": ["Rust", "Go"]})).unwrap();
        assert_eq!(parsed, request(" Best language? ", &["Rust", "Go"]));
    }

    #[test]
    fn test_validation_malformed_body() {
        assert_eq!(validate_poll_request(None), Err(ValidationError::MalformedBody));
        assert_eq!(validate(Value::Null), Err(ValidationError::MalformedBody));
        assert_eq!(validate(json!(["Q", ["A", "B"]])), Err(ValidationError::MalformedBody));
        assert_eq!(validate(json!("Q")), Err(ValidationError::MalformedBody));
    }

    #[test]
    fn test_validation_missing_fields() {
        assert_eq!(validate(json!({})), Err(ValidationError::MissingField));
        assert_eq!(validate(json!({"question": "Q"})), Err(ValidationError::MissingField));
        assert_eq!(validate(json!({"options": ["A", "B"]})), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_validation_question() {
        for question in [json!(""), json!("   \t\n"), json!(42), json!(null), json!(["Q"])] {
            assert_eq!(
                validate(json!({"question": question, "options": ["A", "B"]})),
                Err(ValidationError::InvalidQuestion)
            );
        }
    }

    #[test]
    fn test_validation_options() {
        for options in [json!([]), json!(["A"]), json!("A,B"), json!({"0": "A", "1": "B"})] {
            assert_eq!(
                validate(json!({"question": "Q", "options": options})),
                Err(ValidationError::InsufficientOptions)
            );
        }
        assert_eq!(
            validate(json!({"question": "Q", "options": ["A", 2]})),
            Err(ValidationError::InvalidOptionText)
        );
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(validate(json!({"question": "", "options": []})), Err(ValidationError::InvalidQuestion));
        assert_eq!(validate(json!({"question": 1})), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_duplicate_and_empty_options_accepted() {
        let parsed = validate(json!({"question": "Q", "options": ["A", "A", ""]})).unwrap();
        let mut p = Poll::new("p", parsed);
        assert_eq!(p.options().len(), 3);
        p.record_vote("1").unwrap();
        assert_eq!(p.votes_for("0"), Some(0));
        assert_eq!(p.votes_for("1"), Some(1));
    }
}
