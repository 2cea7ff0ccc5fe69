//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions on unique columns.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a booking with all of its dependencies.
///
/// This is a convenience method that creates:
/// 1. Park
/// 2. User (as the dispatcher who created the booking)
/// 3. Customer
/// 4. Booking
///
/// All entities are created with default values; the booking starts in the
/// pending state with no driver or vehicle. Use the individual factories
/// when you need to customize specific entities.
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::park::Model,
        entity::user::Model,
        entity::customer::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let park = crate::factory::park::create_park(db).await?;
    let user = crate::factory::user::create_user(db, Some(park.id)).await?;
    let customer = crate::factory::customer::create_customer(db).await?;
    let booking =
        crate::factory::booking::create_booking(db, park.id, customer.id, user.id).await?;

    Ok((park, user, customer, booking))
}

/// Creates a booking in an existing park.
///
/// Creates the dispatcher and customer the booking needs, then the booking
/// itself. Useful when a test already has a park and wants several bookings
/// inside it.
pub async fn create_booking_in_park(
    db: &DatabaseConnection,
    park_id: i32,
) -> Result<
    (
        entity::user::Model,
        entity::customer::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db, Some(park_id)).await?;
    let customer = crate::factory::customer::create_customer(db).await?;
    let booking = crate::factory::booking::create_booking(db, park_id, customer.id, user.id).await?;

    Ok((user, customer, booking))
}
