use pass_slip::form::{ApplicationRequest, Field, FieldEdit, FormState, Rank, TimeOfDay};

#[test]
fn test_editing_errored_field_clears_only_that_error() {
    for field in Field::ALL.into_iter().filter(|field| field.is_required()) {
        let mut form = FormState::new();
        form.validate();

        let edit = match field {
            Field::FullName => FieldEdit::FullName("J".into()),
            Field::Rank => FieldEdit::Rank(Some(Rank::Adas)),
            Field::TimeOut => FieldEdit::TimeOut(TimeOfDay::new(7, 0)),
            Field::TimeReturn => FieldEdit::TimeReturn(TimeOfDay::new(9, 0)),
            Field::PlacesToVisit => FieldEdit::PlacesToVisit("Library".into()),
            Field::ReasonForVisit => unreachable!(),
        };
        form.set_field(edit);

        assert!(form.error_for(field).is_none());
        assert_eq!(form.errors().len(), 4);
    }
}

#[test]
fn test_editing_optional_field_keeps_errors() {
    let mut form = FormState::new();
    form.validate();
    form.set_field(FieldEdit::ReasonForVisit("Meeting".into()));
    assert_eq!(form.errors().len(), 5);
}

#[test]
fn test_error_messages_are_fixed_per_field() {
    let mut form = FormState::new();
    let errors = form.validate();
    let messages: Vec<(Field, String)> = errors
        .iter()
        .map(|error| (error.field(), error.to_string()))
        .collect();

    assert_eq!(
        messages,
        vec![
            (Field::FullName, "Full name is required".to_string()),
            (Field::Rank, "Rank is required".to_string()),
            (Field::TimeOut, "Time to be out is required".to_string()),
            (Field::TimeReturn, "Time to return is required".to_string()),
            (Field::PlacesToVisit, "Place(s) to be visited is required".to_string()),
        ]
    );
}

#[test]
fn test_rank_enumeration_is_closed() {
    assert_eq!(Rank::ALL.len(), 8);
    let titles: Vec<&str> = Rank::ALL.iter().map(|rank| rank.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Teacher I",
            "Teacher II",
            "Teacher III",
            "Master Teacher I",
            "School Head",
            "Principal",
            "ADAS",
            "ADA",
        ]
    );
    assert!("Head Teacher".parse::<Rank>().is_err());
}

#[test]
fn test_request_serializes_with_form_keys() {
    let request = ApplicationRequest {
        full_name: "Maria Santos".into(),
        rank: Some(Rank::SchoolHead),
        time_out: TimeOfDay::new(8, 5),
        time_return: None,
        places_to_visit: "District Office".into(),
        reason_for_visit: String::new(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["fullName"], "Maria Santos");
    assert_eq!(value["rank"], "School Head");
    assert_eq!(value["timeOut"], "08:05");
    assert!(value["timeReturn"].is_null());

    let back: ApplicationRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back, request);
}
