//! Input validation and form-field parsing
//!
//! The widgets receive raw text from input fields. This module turns that
//! text into validated numbers and rejects anything the widgets must not
//! store. Range checks live here so tracker state never holds a NaN,
//! a negative weight, or an absurd calorie count.

use crate::errors::InputError;

/// Trim surrounding whitespace and strip leading zeros the way the weight
/// inputs do, so "070" reads as "70" and "0.5" as ".5"
pub fn normalize_numeric_input(raw: &str) -> &str {
    let mut value = raw.trim();
    while value.len() > 1 && value.starts_with('0') {
        value = &value[1..];
    }
    value
}

/// Parse the barbell target-weight field
///
/// An empty field is not an error: it means no target is set and the
/// widget falls back to summing selected plates.
pub fn parse_weight_field(raw: &str) -> Result<Option<f64>, InputError> {
    let value = normalize_numeric_input(raw);
    if value.is_empty() {
        return Ok(None);
    }
    let weight: f64 = value
        .parse()
        .map_err(|_| InputError::NotNumeric("target weight"))?;
    if !weight.is_finite() {
        return Err(InputError::NotNumeric("target weight"));
    }
    if weight <= 0.0 {
        return Err(InputError::OutOfRange(
            "target weight",
            "must be greater than zero".to_string(),
        ));
    }
    if weight > 2000.0 {
        return Err(InputError::OutOfRange(
            "target weight",
            "unreasonably heavy".to_string(),
        ));
    }
    Ok(Some(weight))
}

/// Parse the calorie entry field (required on submit)
pub fn parse_calories_field(raw: &str) -> Result<f64, InputError> {
    let value = normalize_numeric_input(raw);
    if value.is_empty() {
        return Err(InputError::Empty("calories"));
    }
    let calories: f64 = value
        .parse()
        .map_err(|_| InputError::NotNumeric("calories"))?;
    validate_calories(calories)?;
    Ok(calories)
}

/// Parse the lift weight field (required on submit, kilograms)
pub fn parse_lift_weight_field(raw: &str) -> Result<f64, InputError> {
    let value = normalize_numeric_input(raw);
    if value.is_empty() {
        return Err(InputError::Empty("weight"));
    }
    let weight: f64 = value
        .parse()
        .map_err(|_| InputError::NotNumeric("weight"))?;
    validate_lift_weight_kg(weight)?;
    Ok(weight)
}

/// Parse the repetition count field (required on submit, whole number)
pub fn parse_reps_field(raw: &str) -> Result<u32, InputError> {
    let value = normalize_numeric_input(raw);
    if value.is_empty() {
        return Err(InputError::Empty("reps"));
    }
    let reps: i64 = value.parse().map_err(|_| InputError::NotNumeric("reps"))?;
    if reps < 1 {
        return Err(InputError::OutOfRange(
            "reps",
            "must be at least 1".to_string(),
        ));
    }
    if reps > 1000 {
        return Err(InputError::OutOfRange(
            "reps",
            "unreasonably high".to_string(),
        ));
    }
    Ok(reps as u32)
}

/// Parse the BMI body-weight field (kilograms)
///
/// Empty means "not filled in yet" and blocks calculation without erroring.
pub fn parse_body_weight_field(raw: &str) -> Result<Option<f64>, InputError> {
    let value = normalize_numeric_input(raw);
    if value.is_empty() {
        return Ok(None);
    }
    let weight: f64 = value
        .parse()
        .map_err(|_| InputError::NotNumeric("weight"))?;
    validate_body_weight_kg(weight)?;
    Ok(Some(weight))
}

/// Parse the BMI height field (centimetres)
pub fn parse_height_field(raw: &str) -> Result<Option<f64>, InputError> {
    let value = normalize_numeric_input(raw);
    if value.is_empty() {
        return Ok(None);
    }
    let height: f64 = value
        .parse()
        .map_err(|_| InputError::NotNumeric("height"))?;
    validate_height_cm(height)?;
    Ok(Some(height))
}

/// Validate a lifted weight (in kg)
pub fn validate_lift_weight_kg(weight_kg: f64) -> Result<(), InputError> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(InputError::NotNumeric("weight"));
    }
    if weight_kg <= 0.0 {
        return Err(InputError::OutOfRange(
            "weight",
            "must be greater than zero".to_string(),
        ));
    }
    if weight_kg > 1000.0 {
        return Err(InputError::OutOfRange(
            "weight",
            "unreasonably heavy".to_string(),
        ));
    }
    Ok(())
}

/// Validate a repetition count
pub fn validate_reps(reps: u32) -> Result<(), InputError> {
    if reps < 1 {
        return Err(InputError::OutOfRange(
            "reps",
            "must be at least 1".to_string(),
        ));
    }
    if reps > 1000 {
        return Err(InputError::OutOfRange(
            "reps",
            "unreasonably high".to_string(),
        ));
    }
    Ok(())
}

/// Validate a calorie value
pub fn validate_calories(calories: f64) -> Result<(), InputError> {
    if calories.is_nan() || calories.is_infinite() {
        return Err(InputError::NotNumeric("calories"));
    }
    if calories < 0.0 {
        return Err(InputError::OutOfRange(
            "calories",
            "cannot be negative".to_string(),
        ));
    }
    if calories > 50000.0 {
        return Err(InputError::OutOfRange(
            "calories",
            "unreasonably high".to_string(),
        ));
    }
    Ok(())
}

/// Validate a body weight (in kg)
pub fn validate_body_weight_kg(weight_kg: f64) -> Result<(), InputError> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(InputError::NotNumeric("weight"));
    }
    if weight_kg < 20.0 {
        return Err(InputError::OutOfRange(
            "weight",
            "must be at least 20 kg".to_string(),
        ));
    }
    if weight_kg > 500.0 {
        return Err(InputError::OutOfRange(
            "weight",
            "must be at most 500 kg".to_string(),
        ));
    }
    Ok(())
}

/// Validate a height value (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> Result<(), InputError> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err(InputError::NotNumeric("height"));
    }
    if height_cm < 50.0 {
        return Err(InputError::OutOfRange(
            "height",
            "must be at least 50 cm".to_string(),
        ));
    }
    if height_cm > 300.0 {
        return Err(InputError::OutOfRange(
            "height",
            "must be at most 300 cm".to_string(),
        ));
    }
    Ok(())
}

/// Validate a lift name before it becomes a registry key
pub fn validate_lift_name(name: &str) -> Result<(), InputError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty("lift name"));
    }
    if trimmed.len() > 64 {
        return Err(InputError::OutOfRange(
            "lift name",
            "must be at most 64 characters".to_string(),
        ));
    }
    let name_regex = regex_lite::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 '()-]*$").unwrap();
    if !name_regex.is_match(trimmed) {
        return Err(InputError::OutOfRange(
            "lift name",
            "may only contain letters, numbers, spaces and basic punctuation".to_string(),
        ));
    }
    Ok(())
}
