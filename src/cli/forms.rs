//! Client-side form checks, applied before any request is sent

use chrono::NaiveDateTime;

use crate::error::ValidationError;

type Checked<T> = std::result::Result<T, ValidationError>;

/// Accepted appointment time layouts (`datetime-local` style, seconds optional)
const APPOINTMENT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

fn required(field: &'static str, value: &str) -> Checked<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

pub fn name(value: &str) -> Checked<String> {
    required("Full name", value)
}

pub fn title(value: &str) -> Checked<String> {
    required("Title", value)
}

/// Phone numbers are 10 to 15 digits with no separators.
pub fn phone(value: &str) -> Checked<String> {
    let value = required("Phone", value)?;
    let digits = value.chars().all(|c| c.is_ascii_digit());
    if !digits || !(10..=15).contains(&value.len()) {
        return Err(ValidationError::Invalid {
            field: "Phone",
            message: "must be 10-15 digits".to_string(),
        });
    }
    Ok(value)
}

/// Password for a new account
pub fn new_password(value: &str) -> Checked<String> {
    if value.is_empty() {
        return Err(ValidationError::Required { field: "Password" });
    }
    if value.chars().count() < 6 {
        return Err(ValidationError::Invalid {
            field: "Password",
            message: "must be at least 6 characters".to_string(),
        });
    }
    Ok(value.to_string())
}

/// Password at login; only presence is checked.
pub fn password(value: &str) -> Checked<String> {
    if value.is_empty() {
        return Err(ValidationError::Required { field: "Password" });
    }
    Ok(value.to_string())
}

/// Normalize an ISO local date-time to `YYYY-MM-DDTHH:MM:SS`.
pub fn appointment_time(value: &str) -> Checked<String> {
    let value = required("Appointment time", value)?;
    APPOINTMENT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&value, fmt).ok())
        .map(|dt| dt.format(APPOINTMENT_FORMATS[0]).to_string())
        .ok_or_else(|| ValidationError::Invalid {
            field: "Appointment time",
            message: format!("'{}' is not of the form YYYY-MM-DDTHH:MM", value),
        })
}

pub fn rating(value: u8) -> Checked<u8> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::Invalid {
            field: "Rating",
            message: "must be between 1 and 5".to_string(),
        });
    }
    Ok(value)
}

pub fn price(value: f64) -> Checked<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::Invalid {
            field: "Price",
            message: "must be a positive number".to_string(),
        });
    }
    Ok(value)
}

/// M-Pesa takes whole shillings, so the amount is rounded.
pub fn payment_amount(value: f64) -> Checked<u64> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 1.0 {
        return Err(ValidationError::Invalid {
            field: "Amount",
            message: "must be at least 1 shilling".to_string(),
        });
    }
    Ok(rounded as u64)
}
