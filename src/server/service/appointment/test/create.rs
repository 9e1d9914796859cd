use super::*;

/// Tests that a booking is stored as pending even when another status is requested.
///
/// Expected: Ok with status pending
#[tokio::test]
async fn creates_pending_appointment_ignoring_requested_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    let dto = CreateAppointmentDto {
        status: Some("confirmed".to_string()),
        ..booking(shop_id, "2024-06-01", "09:00-09:30")
    };
    let appointment = AppointmentService::new(db, &clock).create(&user, dto).await?;

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.user_id, user.id);
    assert_eq!(appointment.shop_id, shop_id);
    assert_eq!(appointment.date, june_first());
    assert_eq!(appointment.time_slot, "09:00-09:30");

    Ok(())
}

/// Tests that a confirmed appointment blocks new bookings of the same slot.
///
/// Expected: Err(AppointmentError::SlotAlreadyBooked)
#[tokio::test]
async fn rejects_booking_of_confirmed_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
        .date(june_first())
        .time_slot("09:00-09:30")
        .status(AppointmentStatus::Confirmed)
        .build()
        .await?;

    let result = AppointmentService::new(db, &clock)
        .create(&user, booking(shop_id, "2024-06-01", "09:00-09:30"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::SlotAlreadyBooked))
    ));

    Ok(())
}

/// Tests that a timestamp date is normalized before the conflict lookup.
///
/// Expected: Err(AppointmentError::SlotAlreadyBooked) for the RFC 3339 form of the date
#[tokio::test]
async fn normalizes_timestamp_date_before_conflict_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
        .date(june_first())
        .time_slot("09:00-09:30")
        .status(AppointmentStatus::Confirmed)
        .build()
        .await?;

    let result = AppointmentService::new(db, &clock)
        .create(&user, booking(shop_id, "2024-06-01T00:00:00.000Z", "09:00-09:30"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::SlotAlreadyBooked))
    ));

    Ok(())
}

/// Tests that pending, cancelled and completed appointments do not hold a slot.
///
/// Expected: Ok for a booking of the same slot
#[tokio::test]
async fn allows_booking_over_unconfirmed_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    for status in [
        AppointmentStatus::Pending,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ] {
        factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
            .date(june_first())
            .time_slot("09:00-09:30")
            .status(status)
            .build()
            .await?;
    }

    let result = AppointmentService::new(db, &clock)
        .create(&user, booking(shop_id, "2024-06-01", "09:00-09:30"))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a confirmed appointment only blocks its own shop, date and slot.
///
/// Expected: Ok for a different slot, a different date and a different shop
#[tokio::test]
async fn confirmed_slot_only_blocks_exact_triple() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let (_, other_shop) = factory::helpers::create_shop_with_owner(db).await?;
    let clock = early_clock();

    factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
        .date(june_first())
        .time_slot("09:00-09:30")
        .status(AppointmentStatus::Confirmed)
        .build()
        .await?;

    let service = AppointmentService::new(db, &clock);
    service
        .create(&user, booking(shop_id, "2024-06-01", "09:30-10:00"))
        .await?;
    service
        .create(&user, booking(shop_id, "2024-06-02", "09:00-09:30"))
        .await?;
    service
        .create(&user, booking(other_shop.id, "2024-06-01", "09:00-09:30"))
        .await?;

    Ok(())
}

/// Tests booking a shop that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_shop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = setup_shop(db).await?;
    let clock = early_clock();

    let result = AppointmentService::new(db, &clock)
        .create(&user, booking(9999, "2024-06-01", "09:00-09:30"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that malformed dates and slots are rejected before anything is written.
///
/// Expected: Err(InvalidDate) and Err(InvalidTimeSlot)
#[tokio::test]
async fn rejects_malformed_date_and_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();
    let service = AppointmentService::new(db, &clock);

    let result = service
        .create(&user, booking(shop_id, "June 1st", "09:00-09:30"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::InvalidDate(_)))
    ));

    let result = service
        .create(&user, booking(shop_id, "2024-06-01", "09:30-09:00"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::InvalidTimeSlot(_)))
    ));

    let page = service.list_by_shop(shop_id, None, 1, 10).await?;
    assert_eq!(page.total, 0);

    Ok(())
}
