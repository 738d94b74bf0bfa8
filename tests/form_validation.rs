use carbonlog::{
    form::{format_emission, format_totals, Submission, ValidationError, NOT_FOUND_MESSAGE},
    types::CategoryTotal,
};

#[test]
fn empty_fields_are_rejected() {
    assert_eq!(Submission::parse("", "Car", "10"), Err(ValidationError::MissingField));
    assert_eq!(Submission::parse("transport", "Car", ""), Err(ValidationError::MissingField));
    assert_eq!(
        ValidationError::MissingField.user_message(),
        "Please fill in all fields."
    );
}

#[test]
fn blank_amount_is_an_invalid_number_not_a_missing_field() {
    let err = Submission::parse("transport", "Car", "  ").expect_err("blank");
    assert_eq!(err, ValidationError::InvalidAmount(String::new()));
    assert_eq!(err.user_message(), "Please enter a valid number for amount.");
}

#[test]
fn non_numeric_and_non_finite_amounts_are_rejected() {
    for text in ["ten", "1,5", "NaN", "inf", "-inf"] {
        let err = Submission::parse("transport", "Car", text).expect_err(text);
        assert_eq!(err, ValidationError::InvalidAmount(text.to_string()));
        assert_eq!(err.to_string(), "Please enter a valid number for amount.");
    }
}

#[test]
fn negative_amount_is_rejected_but_zero_is_accepted() {
    assert_eq!(
        Submission::parse("food", "Beef", "-2"),
        Err(ValidationError::NegativeAmount(-2.0))
    );

    let zero = Submission::parse("food", "Beef", "0").expect("zero");
    assert_eq!(zero.amount, 0.0);
}

#[test]
fn valid_submission_is_trimmed_and_parsed() {
    let s = Submission::parse(" transport ", "Car\n", " 100 ").expect("valid");
    assert_eq!(
        s,
        Submission {
            category: "transport".to_string(),
            activity: "Car".to_string(),
            amount: 100.0,
        }
    );
}

#[test]
fn emission_is_displayed_with_two_decimals() {
    assert_eq!(format_emission(21.0), "Emission: 21.00 kg CO₂");
    assert_eq!(format_emission(4.75), "Emission: 4.75 kg CO₂");
    assert_eq!(format_emission(1.0 / 3.0), "Emission: 0.33 kg CO₂");
}

#[test]
fn totals_report_capitalizes_categories() {
    assert_eq!(format_totals(&[]), "No data available.");

    let totals = vec![
        CategoryTotal {
            category: "transport".to_string(),
            total: 21.0,
        },
        CategoryTotal {
            category: "food".to_string(),
            total: 54.0,
        },
    ];
    assert_eq!(
        format_totals(&totals),
        "Total Emissions by Category:\nTransport: 21.00 kg CO₂\nFood: 54.00 kg CO₂\n"
    );
    assert_eq!(NOT_FOUND_MESSAGE, "Invalid category or activity selected.");
}
