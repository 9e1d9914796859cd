use super::*;

fn salon_params(owner_id: i32) -> CreateShopParams {
    CreateShopParams {
        owner_id,
        name: "Glow Studio".to_string(),
        contact: "+91 98765 43210".to_string(),
        shop_type: ShopType::Salon,
        address: "12 Park Street".to_string(),
        opening_time: "10:00".to_string(),
        closing_time: "19:00".to_string(),
        slot_duration: 45,
    }
}

/// Tests that a created shop carries its owner's name.
///
/// Expected: Ok with the stored fields and owner_name from the user row
#[tokio::test]
async fn create_includes_owner_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Shop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_shopkeeper(db).await?;

    let shop = ShopRepository::new(db).create(salon_params(owner.id)).await?;

    assert_eq!(shop.name, "Glow Studio");
    assert_eq!(shop.shop_type, ShopType::Salon);
    assert_eq!(shop.slot_duration, 45);
    assert_eq!(shop.owner_id, owner.id);
    assert_eq!(shop.owner_name, owner.name);

    Ok(())
}

/// Tests filtering shops by type and owner.
///
/// Expected: each filter narrows the result, no filter returns every shop
#[tokio::test]
async fn filters_by_type_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Shop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first_owner = factory::create_shopkeeper(db).await?;
    let second_owner = factory::create_shopkeeper(db).await?;

    factory::shop::ShopFactory::new(db, first_owner.id)
        .shop_type(ShopType::Clinic)
        .build()
        .await?;
    factory::shop::ShopFactory::new(db, first_owner.id)
        .shop_type(ShopType::Salon)
        .build()
        .await?;
    factory::shop::ShopFactory::new(db, second_owner.id)
        .shop_type(ShopType::Salon)
        .build()
        .await?;

    let repo = ShopRepository::new(db);

    let all = repo.get_paginated(ShopFilter::default(), 1, 10).await?;
    assert_eq!(all.total, 3);

    let salons = repo
        .get_paginated(
            ShopFilter {
                shop_type: Some(ShopType::Salon),
                owner_id: None,
            },
            1,
            10,
        )
        .await?;
    assert_eq!(salons.total, 2);

    let first_owner_salons = repo
        .get_paginated(
            ShopFilter {
                shop_type: Some(ShopType::Salon),
                owner_id: Some(first_owner.id),
            },
            1,
            10,
        )
        .await?;
    assert_eq!(first_owner_salons.total, 1);
    assert_eq!(first_owner_salons.items[0].owner_id, first_owner.id);

    Ok(())
}

/// Tests case-insensitive search over names and types.
///
/// Expected: matches by name fragment and by type, `%` matched literally
#[tokio::test]
async fn search_matches_name_or_type_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Shop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_shopkeeper(db).await?;

    factory::shop::ShopFactory::new(db, owner.id)
        .name("Sunrise Dental")
        .shop_type(ShopType::Clinic)
        .build()
        .await?;
    factory::shop::ShopFactory::new(db, owner.id)
        .name("Blue Scissors")
        .shop_type(ShopType::Salon)
        .build()
        .await?;

    let repo = ShopRepository::new(db);

    let by_name = repo.search("dental").await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Sunrise Dental");

    let by_type = repo.search("SALON").await?;
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].name, "Blue Scissors");

    assert!(repo.search("%").await?.is_empty());

    Ok(())
}

/// Tests a partial update.
///
/// Expected: only provided fields change; unknown ID returns None
#[tokio::test]
async fn update_changes_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Shop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let repo = ShopRepository::new(db);

    let updated = repo
        .update(
            shop.id,
            UpdateShopParams {
                name: Some("Renamed".to_string()),
                slot_duration: Some(15),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.slot_duration, 15);
    assert_eq!(updated.opening_time, shop.opening_time);
    assert_eq!(updated.closing_time, shop.closing_time);
    assert_eq!(updated.contact, shop.contact);

    let missing = repo
        .update(shop.id + 100, UpdateShopParams::default())
        .await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that deleting a shop removes its appointments.
///
/// Expected: true then false on repeat, no appointments left
#[tokio::test]
async fn delete_cascades_to_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, shop, _) = factory::helpers::create_appointment_with_dependencies(db).await?;
    let repo = ShopRepository::new(db);

    assert!(repo.delete(shop.id).await?);
    assert!(!repo.delete(shop.id).await?);

    assert!(repo.find_by_id(shop.id).await?.is_none());
    assert_eq!(entity::prelude::Appointment::find().count(db).await?, 0);

    Ok(())
}
