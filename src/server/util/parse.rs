//! Parsers for the loosely typed strings accepted by the API.
//!
//! Request DTOs carry dates, times and enum values as plain strings so that invalid
//! input produces a descriptive 400 response instead of a generic deserialization
//! rejection. These helpers turn them into typed values.

use chrono::{DateTime, NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::{AppointmentStatus, ShopType, UserRole};

use crate::server::error::appointment::AppointmentError;

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Parses a 24-hour "HH:MM" time of day.
///
/// # Returns
/// - `Some(NaiveTime)` - Valid time with zero seconds
/// - `None` - Value is not a valid "HH:MM" time
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).ok()
}

/// Start and end of a bookable slot such as "09:00-09:30".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Parses a complete "HH:MM-HH:MM" slot, requiring the start to precede the end.
///
/// # Returns
/// - `Ok(TimeSlot)` - Both times parsed and ordered
/// - `Err(AppointmentError::InvalidTimeSlot)` - Malformed slot or end not after start
pub fn parse_time_slot(value: &str) -> Result<TimeSlot, AppointmentError> {
    let invalid = || AppointmentError::InvalidTimeSlot(value.to_string());

    let (start, end) = value.split_once('-').ok_or_else(invalid)?;
    let start = parse_time_of_day(start).ok_or_else(invalid)?;
    let end = parse_time_of_day(end).ok_or_else(invalid)?;

    if start >= end {
        return Err(invalid());
    }

    Ok(TimeSlot { start, end })
}

/// Parses only the start time of a slot: the part before the first `-`.
///
/// Used for stored slots, where only the start matters for the past-appointment check.
///
/// # Returns
/// - `Ok(NaiveTime)` - Start time of the slot
/// - `Err(AppointmentError::InvalidTimeSlot)` - Start component is not "HH:MM"
pub fn parse_slot_start(value: &str) -> Result<NaiveTime, AppointmentError> {
    let start = value.split('-').next().unwrap_or_default();

    parse_time_of_day(start).ok_or_else(|| AppointmentError::InvalidTimeSlot(value.to_string()))
}

/// Parses a booking date, normalizing full timestamps to their calendar date.
///
/// Accepts "YYYY-MM-DD" or an RFC 3339 timestamp such as "2024-06-01T00:00:00Z".
///
/// # Returns
/// - `Ok(NaiveDate)` - Calendar date of the booking
/// - `Err(AppointmentError::InvalidDate)` - Neither format matched
pub fn parse_booking_date(value: &str) -> Result<NaiveDate, AppointmentError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| AppointmentError::InvalidDate(value.to_string()))
}

pub fn parse_appointment_status(value: &str) -> Result<AppointmentStatus, AppointmentError> {
    match value {
        "pending" => Ok(AppointmentStatus::Pending),
        "confirmed" => Ok(AppointmentStatus::Confirmed),
        "cancelled" => Ok(AppointmentStatus::Cancelled),
        "completed" => Ok(AppointmentStatus::Completed),
        other => Err(AppointmentError::InvalidStatus(other.to_string())),
    }
}

pub fn parse_user_role(value: &str) -> Option<UserRole> {
    match value {
        "user" => Some(UserRole::User),
        "shopkeeper" => Some(UserRole::Shopkeeper),
        "admin" => Some(UserRole::Admin),
        _ => None,
    }
}

pub fn parse_shop_type(value: &str) -> Option<ShopType> {
    match value {
        "clinic" => Some(ShopType::Clinic),
        "salon" => Some(ShopType::Salon),
        "parlor" => Some(ShopType::Parlor),
        "other" => Some(ShopType::Other),
        _ => None,
    }
}

/// Loose phone number check: optional leading `+` then 7 to 15 digits.
///
/// Spaces and dashes between digits are ignored.
pub fn is_phone_number(value: &str) -> bool {
    let value = value.trim();
    let digits = value.strip_prefix('+').unwrap_or(value);

    let mut count = 0;
    for c in digits.chars() {
        match c {
            '0'..='9' => count += 1,
            ' ' | '-' => {}
            _ => return false,
        }
    }

    (7..=15).contains(&count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_slot() {
        let slot = parse_time_slot("09:00-09:30").unwrap();
        assert_eq!(slot.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slot.end, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_time_slots() {
        for value in ["", "09:00", "09:00-", "9am-10am", "10:00-09:00", "09:00-09:00"] {
            assert_eq!(
                parse_time_slot(value),
                Err(AppointmentError::InvalidTimeSlot(value.to_string())),
                "{value}"
            );
        }
    }

    #[test]
    fn slot_start_ignores_everything_after_first_dash() {
        assert_eq!(
            parse_slot_start("14:15-14:45").unwrap(),
            NaiveTime::from_hms_opt(14, 15, 0).unwrap()
        );
        assert_eq!(
            parse_slot_start("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
        assert!(parse_slot_start("noon-13:00").is_err());
    }

    #[test]
    fn normalizes_timestamps_to_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_booking_date("2024-06-01").unwrap(), expected);
        assert_eq!(parse_booking_date("2024-06-01T00:00:00Z").unwrap(), expected);
        assert_eq!(
            parse_booking_date("2024-06-01T18:30:00+05:30").unwrap(),
            expected
        );
        assert!(parse_booking_date("01/06/2024").is_err());
    }

    #[test]
    fn parses_only_known_statuses() {
        assert_eq!(
            parse_appointment_status("confirmed").unwrap(),
            AppointmentStatus::Confirmed
        );
        assert_eq!(
            parse_appointment_status("done"),
            Err(AppointmentError::InvalidStatus("done".to_string()))
        );
    }

    #[test]
    fn checks_phone_numbers() {
        assert!(is_phone_number("+91 98765-43210"));
        assert!(is_phone_number("5551234"));
        assert!(!is_phone_number("555"));
        assert!(!is_phone_number("call me"));
        assert!(!is_phone_number("+1234567890123456"));
    }
}
