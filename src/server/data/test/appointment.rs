use super::*;

/// Expected: new appointment stored as pending with the requested slot
#[tokio::test]
async fn create_stores_pending_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let appointment = AppointmentRepository::new(db)
        .create(CreateAppointmentParam {
            user_id: user.id,
            shop_id: shop.id,
            date: june_first(),
            time_slot: "09:00-09:30".to_string(),
        })
        .await?;

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.date, june_first());
    assert_eq!(appointment.time_slot, "09:00-09:30");
    assert_eq!(appointment.user_id, user.id);

    Ok(())
}

/// Tests lookup of the confirmed appointment holding a slot.
///
/// Expected: pending rows and the excluded ID are ignored, other slots never match
#[tokio::test]
async fn finds_only_confirmed_appointment_in_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let user = factory::create_user(db).await?;
    let repo = AppointmentRepository::new(db);

    factory::appointment::AppointmentFactory::new(db, user.id, shop.id)
        .date(june_first())
        .build()
        .await?;
    assert!(repo
        .find_confirmed_in_slot(shop.id, june_first(), "09:00-09:30", None)
        .await?
        .is_none());

    let confirmed = factory::appointment::AppointmentFactory::new(db, user.id, shop.id)
        .date(june_first())
        .status(AppointmentStatus::Confirmed)
        .build()
        .await?;

    let found = repo
        .find_confirmed_in_slot(shop.id, june_first(), "09:00-09:30", None)
        .await?
        .unwrap();
    assert_eq!(found.id, confirmed.id);

    assert!(repo
        .find_confirmed_in_slot(shop.id, june_first(), "09:00-09:30", Some(confirmed.id))
        .await?
        .is_none());
    assert!(repo
        .find_confirmed_in_slot(shop.id, june_first(), "09:30-10:00", None)
        .await?
        .is_none());

    Ok(())
}

/// Tests status updates on existing and missing appointments.
///
/// Expected: status changed for a known ID, RecordNotUpdated for an unknown one
#[tokio::test]
async fn update_status_reports_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    let repo = AppointmentRepository::new(db);

    let updated = repo
        .update_status(appointment.id, AppointmentStatus::Cancelled)
        .await?;
    assert_eq!(updated.status, AppointmentStatus::Cancelled);
    assert_eq!(
        repo.find_by_id(appointment.id).await?.unwrap().status,
        AppointmentStatus::Cancelled
    );

    let result = repo
        .update_status(appointment.id + 100, AppointmentStatus::Cancelled)
        .await;
    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

/// Tests that listing is scoped to one shop.
///
/// Expected: appointments of other shops are not listed
#[tokio::test]
async fn lists_only_the_requested_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, shop, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let (_, other_shop) = factory::helpers::create_shop_with_owner(db).await?;
    factory::create_appointment(db, user.id, other_shop.id).await?;

    let page = AppointmentRepository::new(db)
        .get_paginated_by_shop(shop.id, None, 1, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].appointment.id, appointment.id);
    assert_eq!(page.items[0].user_mobile.as_deref(), Some(user.mobile.as_str()));

    let confirmed = AppointmentRepository::new(db)
        .get_paginated_by_shop(shop.id, Some(AppointmentStatus::Confirmed), 1, 10)
        .await?;
    assert_eq!(confirmed.total, 0);

    Ok(())
}
