//! Shop domain models and parameters.
//!
//! Shops are owned by shopkeepers and define the opening hours and slot length users
//! book against. Validation of create and update input happens while converting from
//! DTOs so that repositories only ever receive well-formed values.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ShopType;

use crate::{
    model::shop::{CreateShopDto, ShopDto, ShopTypeDto, UpdateShopDto},
    server::{
        error::AppError,
        util::parse::{is_phone_number, parse_shop_type, parse_time_of_day},
    },
};

pub const DEFAULT_SLOT_DURATION: i32 = 30;

/// Shop with its owner's display name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub shop_type: ShopType,
    pub address: String,
    pub owner_id: i32,
    /// Name of the owning user, if set and loaded.
    pub owner_name: Option<String>,
    /// "HH:MM"
    pub opening_time: String,
    /// "HH:MM"
    pub closing_time: String,
    /// Minutes per bookable slot.
    pub slot_duration: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    /// Converts a shop entity and its optionally loaded owner into a domain model.
    pub fn from_entity(entity: entity::shop::Model, owner: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            contact: entity.contact,
            shop_type: entity.shop_type,
            address: entity.address,
            owner_id: entity.owner_id,
            owner_name: owner.and_then(|owner| owner.name),
            opening_time: entity.opening_time,
            closing_time: entity.closing_time,
            slot_duration: entity.slot_duration,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ShopDto {
        ShopDto {
            id: self.id,
            name: self.name,
            contact: self.contact,
            shop_type: self.shop_type.into(),
            address: self.address,
            owner_id: self.owner_id,
            owner_name: self.owner_name,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            slot_duration: self.slot_duration,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<ShopType> for ShopTypeDto {
    fn from(shop_type: ShopType) -> Self {
        match shop_type {
            ShopType::Clinic => Self::Clinic,
            ShopType::Salon => Self::Salon,
            ShopType::Parlor => Self::Parlor,
            ShopType::Other => Self::Other,
        }
    }
}

/// Validated parameters for creating a shop.
#[derive(Debug, Clone)]
pub struct CreateShopParams {
    pub owner_id: i32,
    pub name: String,
    pub contact: String,
    pub shop_type: ShopType,
    pub address: String,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_duration: i32,
}

impl CreateShopParams {
    /// Validates a create request for the given owner.
    ///
    /// # Returns
    /// - `Ok(CreateShopParams)` - All fields present and well-formed
    /// - `Err(AppError::BadRequest)` - First failing field, described for the client
    pub fn from_dto(owner_id: i32, dto: CreateShopDto) -> Result<Self, AppError> {
        let name = required("Name", dto.name)?;
        let address = required("Address", dto.address)?;
        let opening_time = required("Opening time", dto.opening_time)?;
        let closing_time = required("Closing time", dto.closing_time)?;

        let contact = validate_contact(dto.contact)?;
        let shop_type = validate_shop_type(&dto.shop_type)?;
        validate_hours(&opening_time, &closing_time)?;
        let slot_duration = validate_slot_duration(dto.slot_duration.unwrap_or(DEFAULT_SLOT_DURATION))?;

        Ok(Self {
            owner_id,
            name,
            contact,
            shop_type,
            address,
            opening_time,
            closing_time,
            slot_duration,
        })
    }
}

/// Validated partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateShopParams {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub shop_type: Option<ShopType>,
    pub address: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub slot_duration: Option<i32>,
}

impl UpdateShopParams {
    /// Validates the provided fields of an update against the shop being changed.
    ///
    /// Opening and closing times are checked as a pair, taking whichever side is not
    /// being updated from `current`.
    pub fn from_dto(dto: UpdateShopDto, current: &Shop) -> Result<Self, AppError> {
        let name = dto.name.map(|v| required("Name", v)).transpose()?;
        let address = dto.address.map(|v| required("Address", v)).transpose()?;
        let opening_time = dto
            .opening_time
            .map(|v| required("Opening time", v))
            .transpose()?;
        let closing_time = dto
            .closing_time
            .map(|v| required("Closing time", v))
            .transpose()?;
        let contact = dto.contact.map(validate_contact).transpose()?;
        let shop_type = dto
            .shop_type
            .as_deref()
            .map(validate_shop_type)
            .transpose()?;
        let slot_duration = dto.slot_duration.map(validate_slot_duration).transpose()?;

        if opening_time.is_some() || closing_time.is_some() {
            validate_hours(
                opening_time.as_deref().unwrap_or(&current.opening_time),
                closing_time.as_deref().unwrap_or(&current.closing_time),
            )?;
        }

        Ok(Self {
            name,
            contact,
            shop_type,
            address,
            opening_time,
            closing_time,
            slot_duration,
        })
    }
}

/// Optional filters for shop listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShopFilter {
    pub shop_type: Option<ShopType>,
    pub owner_id: Option<i32>,
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value)
}

fn validate_contact(contact: String) -> Result<String, AppError> {
    let contact = contact.trim().to_string();
    if !is_phone_number(&contact) {
        return Err(AppError::BadRequest(
            "Contact must be a valid phone number".to_string(),
        ));
    }
    Ok(contact)
}

fn validate_shop_type(value: &str) -> Result<ShopType, AppError> {
    parse_shop_type(value.trim()).ok_or_else(|| {
        AppError::BadRequest(
            "Type must be one of: clinic, salon, parlor, other".to_string(),
        )
    })
}

fn validate_hours(opening_time: &str, closing_time: &str) -> Result<(), AppError> {
    let invalid_format = |field: &str| AppError::BadRequest(format!("{} must be in HH:MM format", field));

    let opening = parse_time_of_day(opening_time).ok_or_else(|| invalid_format("Opening time"))?;
    let closing = parse_time_of_day(closing_time).ok_or_else(|| invalid_format("Closing time"))?;

    if opening >= closing {
        return Err(AppError::BadRequest(
            "Opening time must be before closing time".to_string(),
        ));
    }
    Ok(())
}

fn validate_slot_duration(minutes: i32) -> Result<i32, AppError> {
    if minutes < 1 {
        return Err(AppError::BadRequest(
            "Slot duration must be at least 1 minute".to_string(),
        ));
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto() -> CreateShopDto {
        CreateShopDto {
            name: "Downtown Clinic".to_string(),
            contact: "+91 98765 43210".to_string(),
            shop_type: "clinic".to_string(),
            address: "12 Main Street".to_string(),
            opening_time: "09:00".to_string(),
            closing_time: "17:00".to_string(),
            slot_duration: None,
        }
    }

    fn shop() -> Shop {
        let now = Utc::now();
        Shop {
            id: 1,
            name: "Downtown Clinic".to_string(),
            contact: "5551234".to_string(),
            shop_type: ShopType::Clinic,
            address: "12 Main Street".to_string(),
            owner_id: 1,
            owner_name: None,
            opening_time: "09:00".to_string(),
            closing_time: "17:00".to_string(),
            slot_duration: 30,
            created_at: now,
            updated_at: now,
        }
    }

    fn bad_request(result: Result<impl std::fmt::Debug, AppError>) -> String {
        match result {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn defaults_slot_duration() {
        let params = CreateShopParams::from_dto(7, create_dto()).unwrap();

        assert_eq!(params.owner_id, 7);
        assert_eq!(params.slot_duration, DEFAULT_SLOT_DURATION);
        assert_eq!(params.shop_type, ShopType::Clinic);
    }

    #[test]
    fn rejects_blank_name() {
        let dto = CreateShopDto {
            name: "   ".to_string(),
            ..create_dto()
        };

        assert_eq!(bad_request(CreateShopParams::from_dto(1, dto)), "Name is required");
    }

    #[test]
    fn rejects_unknown_type_and_bad_contact() {
        let dto = CreateShopDto {
            shop_type: "gym".to_string(),
            ..create_dto()
        };
        assert!(bad_request(CreateShopParams::from_dto(1, dto)).starts_with("Type must be"));

        let dto = CreateShopDto {
            contact: "not a number".to_string(),
            ..create_dto()
        };
        assert_eq!(
            bad_request(CreateShopParams::from_dto(1, dto)),
            "Contact must be a valid phone number"
        );
    }

    #[test]
    fn rejects_inverted_hours_and_zero_duration() {
        let dto = CreateShopDto {
            opening_time: "18:00".to_string(),
            ..create_dto()
        };
        assert_eq!(
            bad_request(CreateShopParams::from_dto(1, dto)),
            "Opening time must be before closing time"
        );

        let dto = CreateShopDto {
            slot_duration: Some(0),
            ..create_dto()
        };
        assert!(bad_request(CreateShopParams::from_dto(1, dto)).starts_with("Slot duration"));
    }

    #[test]
    fn update_checks_hours_against_current_shop() {
        let dto = UpdateShopDto {
            opening_time: Some("17:30".to_string()),
            ..Default::default()
        };
        assert_eq!(
            bad_request(UpdateShopParams::from_dto(dto, &shop())),
            "Opening time must be before closing time"
        );

        let dto = UpdateShopDto {
            closing_time: Some("20:00".to_string()),
            ..Default::default()
        };
        let params = UpdateShopParams::from_dto(dto, &shop()).unwrap();
        assert_eq!(params.closing_time.as_deref(), Some("20:00"));
        assert!(params.name.is_none());
    }
}
