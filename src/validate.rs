use crate::app::InputValues;

/// What went wrong with the entered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    NotANumber,
    NonPositive,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingField => "All the values are required",
            ValidationError::NotANumber => "All the values must be a valid number",
            ValidationError::NonPositive => "All the values must be a positive number",
        }
    }
}

/// Check all three fields.
///
/// Every rule runs over every field and overwrites any earlier failure, so
/// the reported error is the *last* rule in check order that failed:
/// NonPositive beats NotANumber beats MissingField. An empty field is judged
/// only by the missing-field rule; a field that does not parse is judged
/// only by the number rule.
pub fn validate(inputs: &InputValues) -> Result<(), ValidationError> {
    let fields = [
        inputs.amount.as_str(),
        inputs.interest.as_str(),
        inputs.years.as_str(),
    ];
    let mut failed = None;

    if fields.iter().any(|f| f.is_empty()) {
        failed = Some(ValidationError::MissingField);
    }
    if fields
        .iter()
        .any(|f| !f.is_empty() && f.parse::<f64>().is_err())
    {
        failed = Some(ValidationError::NotANumber);
    }
    if fields
        .iter()
        .any(|f| f.parse::<f64>().map_or(false, |v| v <= 0.0))
    {
        failed = Some(ValidationError::NonPositive);
    }

    match failed {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(amount: &str, interest: &str, years: &str) -> InputValues {
        InputValues {
            amount: amount.to_string(),
            interest: interest.to_string(),
            years: years.to_string(),
        }
    }

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(validate(&inputs("100000", "12.5", "5")), Ok(()));
    }

    #[test]
    fn empty_field_reports_missing() {
        assert_eq!(
            validate(&inputs("", "5", "10")),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn garbage_reports_not_a_number() {
        assert_eq!(
            validate(&inputs("12abc", "5", "10")),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate(&inputs("1.2.3", "5", "10")),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn negative_reports_non_positive() {
        assert_eq!(
            validate(&inputs("-100", "5", "10")),
            Err(ValidationError::NonPositive)
        );
        assert_eq!(
            validate(&inputs("0", "5", "10")),
            Err(ValidationError::NonPositive)
        );
    }

    #[test]
    fn last_failed_rule_wins() {
        // All three rules fail on different fields; the positivity rule is
        // checked last, so its message is the one shown.
        assert_eq!(
            validate(&inputs("", "abc", "-5")),
            Err(ValidationError::NonPositive)
        );
        // Missing plus unparseable, nothing non-positive.
        assert_eq!(
            validate(&inputs("", "abc", "10")),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn messages_match_the_displayed_strings() {
        assert_eq!(
            ValidationError::MissingField.message(),
            "All the values are required"
        );
        assert_eq!(
            ValidationError::NotANumber.message(),
            "All the values must be a valid number"
        );
        assert_eq!(
            ValidationError::NonPositive.message(),
            "All the values must be a positive number"
        );
    }
}
