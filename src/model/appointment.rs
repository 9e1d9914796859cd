use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatusDto {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateAppointmentDto {
    pub shop_id: Option<i32>,
    /// "YYYY-MM-DD" or an RFC 3339 timestamp; only the calendar date is kept.
    pub date: String,
    /// Format: "HH:MM-HH:MM"
    pub time_slot: String,
    /// Accepted for compatibility, new bookings always start as pending.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateAppointmentStatusDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AppointmentUserDto {
    pub name: Option<String>,
    pub mobile: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub user_id: i32,
    pub shop_id: i32,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: AppointmentStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AppointmentUserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AppointmentResponseDto {
    pub message: String,
    pub appointment: AppointmentDto,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn dto(user: Option<AppointmentUserDto>) -> AppointmentDto {
        let at = Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap();
        AppointmentDto {
            id: 3,
            user_id: 1,
            shop_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time_slot: "09:00-09:30".to_string(),
            status: AppointmentStatusDto::Confirmed,
            created_at: at,
            updated_at: at,
            user,
        }
    }

    #[test]
    fn serializes_status_and_date_as_plain_strings() {
        let value = serde_json::to_value(dto(None)).unwrap();

        assert_eq!(value["status"], json!("confirmed"));
        assert_eq!(value["date"], json!("2024-06-01"));
        assert!(value.get("user").is_none());
    }

    #[test]
    fn includes_booking_user_when_listed() {
        let value = serde_json::to_value(dto(Some(AppointmentUserDto {
            name: Some("Meera".to_string()),
            mobile: "9000000001".to_string(),
        })))
        .unwrap();

        assert_eq!(
            value["user"],
            json!({ "name": "Meera", "mobile": "9000000001" })
        );
    }

    #[test]
    fn status_names_match_wire_format() {
        for status in [
            AppointmentStatusDto::Pending,
            AppointmentStatusDto::Confirmed,
            AppointmentStatusDto::Cancelled,
            AppointmentStatusDto::Completed,
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
    }
}
