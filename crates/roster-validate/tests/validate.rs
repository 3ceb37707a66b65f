use roster_map::match_columns;
use roster_model::{FieldDefaults, Template};
use roster_validate::{ValidationError, check_declared_requirements, check_row_completeness};

fn template(columns: &[&str], required: &[&str]) -> Template {
    Template {
        id: 1,
        name: "10K Early Bird".to_string(),
        event_name: "City Run".to_string(),
        race_name: "10K".to_string(),
        ticket_name: "Early Bird".to_string(),
        columns: columns.iter().map(|&c| c.to_string()).collect(),
        required_columns: required.iter().map(|&c| c.to_string()).collect(),
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_string()).collect()
}

#[test]
fn preflight_aggregates_all_missing_fields() {
    let template = template(
        &["#email", "first_name", "last_name", "shirt_size", "wave"],
        &["first_name", "last_name", "shirt_size", "wave"],
    );
    let headers = headers(&["First Name", "Last Name", "Email"]);
    let mapping = match_columns(&template, &headers).unwrap();

    let err =
        check_declared_requirements(&template, &mapping, &FieldDefaults::new()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRequiredFields(vec![
            "shirt_size".to_string(),
            "wave".to_string()
        ])
    );
    assert_eq!(err.to_string(), "Missing required fields: shirt_size, wave");
}

#[test]
fn preflight_passes_with_match_or_default() {
    let template = template(
        &["#email", "first_name", "last_name", "shirt_size", "wave"],
        &["first_name", "last_name", "shirt_size", "wave"],
    );
    let headers = headers(&["First Name", "Last Name", "Email", "Shirt Size"]);
    let mapping = match_columns(&template, &headers).unwrap();
    let mut defaults = FieldDefaults::new();
    defaults.insert("wave", "A");

    assert!(check_declared_requirements(&template, &mapping, &defaults).is_ok());
}

#[test]
fn preflight_ignores_whitespace_only_defaults() {
    let template = template(&["#email", "first_name", "last_name", "wave"], &["wave"]);
    let headers = headers(&["First Name", "Last Name", "Email"]);
    let mapping = match_columns(&template, &headers).unwrap();
    let mut defaults = FieldDefaults::new();
    defaults.insert("wave", "  ");

    assert!(matches!(
        check_declared_requirements(&template, &mapping, &defaults),
        Err(ValidationError::MissingRequiredFields(_))
    ));
}

#[test]
fn preflight_skips_optional_columns() {
    let template = template(&["#email", "first_name", "last_name", "club"], &[]);
    let headers = headers(&["First Name", "Last Name", "Email"]);
    let mapping = match_columns(&template, &headers).unwrap();

    assert!(check_declared_requirements(&template, &mapping, &FieldDefaults::new()).is_ok());
}

#[test]
fn row_check_identifies_first_violation_only() {
    let template = template(&["#email", "first_name"], &["first_name"]);
    let rows = vec![
        vec!["avery@example.com".to_string(), "Avery".to_string()],
        vec![String::new(), "Blair".to_string()],
        vec!["casey@example.com".to_string(), String::new()],
    ];

    let err = check_row_completeness(&template, &rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRowValue {
            row: 2,
            column: "#email".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Row 2 is missing a required value for #email."
    );
}

#[test]
fn roster_fields_are_required_even_when_not_flagged() {
    // first_name carries no required flag but is a canonical roster field.
    let template = template(&["#email", "first_name", "club"], &[]);
    let rows = vec![vec![
        "avery@example.com".to_string(),
        "  ".to_string(),
        String::new(),
    ]];

    let err = check_row_completeness(&template, &rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRowValue {
            row: 1,
            column: "first_name".to_string(),
        }
    );
}

#[test]
fn row_check_passes_complete_rows() {
    let template = template(&["#email", "first_name", "club"], &[]);
    let rows = vec![vec![
        "avery@example.com".to_string(),
        "Avery".to_string(),
        String::new(),
    ]];
    assert!(check_row_completeness(&template, &rows).is_ok());
}
