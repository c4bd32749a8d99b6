//! # Validation Utilities
//!
//! Presence checks only. Checkout forms mirror the HTML `required`
//! attribute and never check formats.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Names of the `(name, value)` pairs whose value is blank, in input order.
pub fn missing_fields<'a, I>(fields: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields
        .into_iter()
        .filter(|(name, value)| validate_not_empty(value, name).is_err())
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x", "name").is_ok());
        assert_eq!(
            validate_not_empty("   ", "name"),
            Err("name cannot be empty".to_string())
        );
    }

    #[test]
    fn test_missing_fields_keeps_order() {
        let missing = missing_fields([("contact", ""), ("name", "Ann"), ("city", " ")]);
        assert_eq!(missing, vec!["contact", "city"]);
    }
}
