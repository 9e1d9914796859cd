use super::*;

/// Tests listing order and the booking user's details.
///
/// Expected: appointments sorted by date then slot, each with user name and mobile
#[tokio::test]
async fn lists_appointments_in_schedule_order_with_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    let june_second = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
    for (date, slot) in [
        (june_second, "09:00-09:30"),
        (june_first(), "10:00-10:30"),
        (june_first(), "09:00-09:30"),
    ] {
        factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
            .date(date)
            .time_slot(slot)
            .build()
            .await?;
    }

    let page = AppointmentService::new(db, &clock)
        .list_by_shop(shop_id, None, 1, 10)
        .await?;

    let order: Vec<(NaiveDate, String)> = page
        .items
        .iter()
        .map(|row| (row.appointment.date, row.appointment.time_slot.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            (june_first(), "09:00-09:30".to_string()),
            (june_first(), "10:00-10:30".to_string()),
            (june_second, "09:00-09:30".to_string()),
        ]
    );

    let dto = page.items[0].clone().into_dto();
    let listed_user = dto.user.unwrap();
    assert_eq!(listed_user.mobile, user.mobile);
    assert_eq!(listed_user.name, user.name);

    Ok(())
}

/// Tests status filtering and pagination numbers.
///
/// Expected: only matching appointments counted, pages split by limit
#[tokio::test]
async fn filters_by_status_and_paginates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    for slot in ["09:00-09:30", "09:30-10:00", "10:00-10:30"] {
        factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
            .time_slot(slot)
            .build()
            .await?;
    }
    factory::appointment::AppointmentFactory::new(db, user.id, shop_id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;

    let service = AppointmentService::new(db, &clock);

    let page = service.list_by_shop(shop_id, Some("pending"), 2, 2).await?;
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);
    assert_eq!(page.items.len(), 1);

    let page = service.list_by_shop(shop_id, Some("cancelled"), 1, 10).await?;
    assert_eq!(page.total, 1);

    let result = service.list_by_shop(shop_id, Some("done"), 1, 10).await;
    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::InvalidStatus(_)))
    ));

    Ok(())
}

/// Tests a page number far past the last page.
///
/// Expected: Ok with no items and the full total
#[tokio::test]
async fn page_past_the_end_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop_id) = setup_shop(db).await?;
    let clock = early_clock();

    factory::create_appointment(db, user.id, shop_id).await?;

    let page = AppointmentService::new(db, &clock)
        .list_by_shop(shop_id, None, u64::MAX, 100)
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}
