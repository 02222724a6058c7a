use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

/// International phone number: optional leading `+`, then at least ten digits,
/// whitespace, hyphens or parentheses.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

/// Names of the fields that must be present in every submission, as they
/// appear in the request payload.
pub const REQUIRED_FIELDS: [&str; 5] = ["fullName", "phone", "eventType", "eventDate", "guestCount"];

/// A contact form submission as received, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub guest_count: Option<String>,
    pub additional_details: Option<String>,
}

/// A fully validated and normalized event inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryRequest {
    pub full_name: InquiryFullName,
    pub phone: InquiryPhone,
    pub event_type: InquiryEventType,
    pub event_date: InquiryEventDate,
    pub guest_count: InquiryGuestCount,
    pub additional_details: InquiryAdditionalDetails,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct InquiryFullName(String);

#[nutype(
    sanitize(trim),
    validate(regex = PHONE_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct InquiryPhone(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 3),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct InquiryEventType(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct InquiryEventDate(String);

#[nutype(
    validate(greater = 0),
    derive(Debug, Clone, Copy, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct InquiryGuestCount(u32);

#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Display)
)]
pub struct InquiryAdditionalDetails(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InquiryValidationError {
    #[error("Missing required fields: fullName, phone, eventType, eventDate, guestCount")]
    MissingFields,
    #[error("Invalid phone number format")]
    InvalidPhone,
    #[error("Guest count must be a positive number")]
    InvalidGuestCount,
    #[error("Full name must be at least 2 characters")]
    InvalidFullName,
    #[error("Event type must be at least 3 characters")]
    InvalidEventType,
}

impl TryFrom<InquiryForm> for InquiryRequest {
    type Error = InquiryValidationError;

    /// Rules are checked in a fixed order and the first violation is
    /// reported: missing fields, phone format, guest count, then the minimum
    /// lengths of full name and event type.
    fn try_from(form: InquiryForm) -> Result<Self, Self::Error> {
        let (Some(full_name), Some(phone), Some(event_type), Some(event_date), Some(guest_count)) = (
            required(form.full_name),
            required(form.phone),
            required(form.event_type),
            required(form.event_date),
            required(form.guest_count),
        ) else {
            return Err(InquiryValidationError::MissingFields);
        };

        let phone =
            InquiryPhone::try_new(phone).map_err(|_| InquiryValidationError::InvalidPhone)?;

        let guest_count = leading_count(&guest_count)
            .and_then(|count| InquiryGuestCount::try_new(count).ok())
            .ok_or(InquiryValidationError::InvalidGuestCount)?;

        let full_name = InquiryFullName::try_new(full_name)
            .map_err(|_| InquiryValidationError::InvalidFullName)?;

        let event_type = InquiryEventType::try_new(event_type)
            .map_err(|_| InquiryValidationError::InvalidEventType)?;

        let event_date = InquiryEventDate::try_new(event_date)
            .map_err(|_| InquiryValidationError::MissingFields)?;

        let additional_details =
            InquiryAdditionalDetails::new(form.additional_details.unwrap_or_default());

        Ok(Self {
            full_name,
            phone,
            event_type,
            event_date,
            guest_count,
            additional_details,
        })
    }
}

/// Number given by the leading digits of `value`, after an optional sign.
/// Anything after the digits is ignored, so `"150 guests"` is 150 and `"1.5"`
/// is 1. Negative numbers and values beyond `u32` yield `None`.
fn leading_count(value: &str) -> Option<u32> {
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() || negative {
        return None;
    }
    digits.parse().ok()
}

/// Absent and whitespace-only values both count as missing.
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use venue_utils::assert_matches;

    use super::*;

    fn form() -> InquiryForm {
        InquiryForm {
            full_name: Some("Jane Doe".into()),
            phone: Some("+91 9911620620".into()),
            event_type: Some("Wedding".into()),
            event_date: Some("2025-12-01".into()),
            guest_count: Some("150".into()),
            additional_details: None,
        }
    }

    #[test]
    fn ok() {
        // Act
        let result = InquiryRequest::try_from(form()).unwrap();

        // Assert
        assert_eq!(*result.full_name, "Jane Doe");
        assert_eq!(*result.phone, "+91 9911620620");
        assert_eq!(*result.event_type, "Wedding");
        assert_eq!(*result.event_date, "2025-12-01");
        assert_eq!(*result.guest_count, 150);
        assert_eq!(*result.additional_details, "");
    }

    #[test]
    fn trims_fields() {
        // Arrange
        let form = InquiryForm {
            full_name: Some("  Jane Doe ".into()),
            phone: Some(" (555) 123-4567 ".into()),
            event_type: Some("\tGala\n".into()),
            event_date: Some(" next spring ".into()),
            guest_count: Some(" 42 ".into()),
            additional_details: Some("  Vegetarian menu please.  ".into()),
        };

        // Act
        let result = InquiryRequest::try_from(form).unwrap();

        // Assert
        assert_eq!(*result.full_name, "Jane Doe");
        assert_eq!(*result.phone, "(555) 123-4567");
        assert_eq!(*result.event_type, "Gala");
        assert_eq!(*result.event_date, "next spring");
        assert_eq!(*result.guest_count, 42);
        assert_eq!(*result.additional_details, "Vegetarian menu please.");
    }

    #[test]
    fn missing_fields() {
        let clear: [fn(&mut InquiryForm); 5] = [
            |f| f.full_name = None,
            |f| f.phone = None,
            |f| f.event_type = None,
            |f| f.event_date = None,
            |f| f.guest_count = None,
        ];

        for clear in clear {
            // Arrange
            let mut form = form();
            clear(&mut form);

            // Act
            let result = InquiryRequest::try_from(form);

            // Assert
            assert_matches!(result, Err(InquiryValidationError::MissingFields));
        }
    }

    #[test]
    fn blank_fields_are_missing() {
        // Arrange
        let form = InquiryForm {
            event_date: Some("   ".into()),
            ..form()
        };

        // Act
        let result = InquiryRequest::try_from(form);

        // Assert
        assert_matches!(result, Err(InquiryValidationError::MissingFields));
    }

    #[test]
    fn missing_fields_take_precedence() {
        // Arrange
        let form = InquiryForm {
            phone: Some("abc".into()),
            guest_count: None,
            ..form()
        };

        // Act
        let result = InquiryRequest::try_from(form);

        // Assert
        assert_matches!(result, Err(InquiryValidationError::MissingFields));
    }

    #[test]
    fn invalid_phone() {
        for phone in ["abc", "123", "+", "++91 9911620620", "9911620620x", "phone: 9911620620"] {
            // Arrange
            let form = InquiryForm {
                phone: Some(phone.into()),
                ..form()
            };

            // Act
            let result = InquiryRequest::try_from(form);

            // Assert
            assert_matches!(result, Err(InquiryValidationError::InvalidPhone));
        }
    }

    #[test]
    fn valid_phone() {
        for phone in ["9911620620", "+1 (555) 123-4567", "030 1234 5678", "(0) 12-34-56-78"] {
            assert!(PHONE_REGEX.is_match(phone), "{phone}");
        }
    }

    #[test]
    fn invalid_guest_count() {
        for guest_count in ["ten", "0", "-5", "-3", "0.5", "-0", "+", "abc12", "99999999999"] {
            // Arrange
            let form = InquiryForm {
                guest_count: Some(guest_count.into()),
                ..form()
            };

            // Act
            let result = InquiryRequest::try_from(form);

            // Assert
            assert_matches!(result, Err(InquiryValidationError::InvalidGuestCount));
        }
    }

    #[test]
    fn leading_guest_count() {
        for (guest_count, expected) in [
            ("150 guests", 150),
            ("1.5", 1),
            ("12abc", 12),
            ("+5", 5),
            ("007", 7),
        ] {
            // Arrange
            let form = InquiryForm {
                guest_count: Some(guest_count.into()),
                ..form()
            };

            // Act
            let result = InquiryRequest::try_from(form).unwrap();

            // Assert
            assert_eq!(*result.guest_count, expected, "{guest_count}");
        }
    }

    #[test]
    fn invalid_full_name() {
        // Arrange
        let form = InquiryForm {
            full_name: Some(" J ".into()),
            ..form()
        };

        // Act
        let result = InquiryRequest::try_from(form);

        // Assert
        assert_matches!(result, Err(InquiryValidationError::InvalidFullName));
    }

    #[test]
    fn invalid_event_type() {
        // Arrange
        let form = InquiryForm {
            event_type: Some("AB".into()),
            ..form()
        };

        // Act
        let result = InquiryRequest::try_from(form);

        // Assert
        assert_matches!(result, Err(InquiryValidationError::InvalidEventType));
    }

    #[test]
    fn deterministic() {
        let first = InquiryRequest::try_from(form());
        let second = InquiryRequest::try_from(form());
        assert_eq!(first, second);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InquiryValidationError::MissingFields.to_string(),
            format!("Missing required fields: {}", REQUIRED_FIELDS.join(", "))
        );
        assert_eq!(
            InquiryValidationError::InvalidPhone.to_string(),
            "Invalid phone number format"
        );
        assert_eq!(
            InquiryValidationError::InvalidGuestCount.to_string(),
            "Guest count must be a positive number"
        );
    }
}
