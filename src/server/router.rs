//! Route table and OpenAPI documentation.
//!
//! All API routes are registered here and served under `/api`. The generated
//! OpenAPI document is browsable at `/swagger-ui` in development.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{
            analytics, auth, booking, customer, driver, notification, park, setting, user, vehicle,
        },
        realtime,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        auth::me,
        auth::request_password_reset,
        auth::confirm_password_reset,
        park::create_park,
        park::get_parks,
        park::get_park,
        park::update_park,
        park::delete_park,
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        driver::create_driver,
        driver::get_drivers,
        driver::get_driver,
        driver::update_driver,
        driver::delete_driver,
        vehicle::create_vehicle,
        vehicle::get_vehicles,
        vehicle::get_vehicle,
        vehicle::update_vehicle,
        vehicle::assign_vehicle_driver,
        vehicle::delete_vehicle,
        customer::create_customer,
        customer::get_customers,
        customer::get_customer,
        customer::update_customer,
        customer::delete_customer,
        booking::create_booking,
        booking::get_bookings,
        booking::get_booking,
        booking::update_booking,
        booking::assign_booking,
        booking::update_booking_status,
        booking::delete_booking,
        setting::get_settings,
        setting::get_setting,
        setting::upsert_setting,
        setting::delete_setting,
        notification::get_notifications,
        notification::get_unread_count,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        analytics::get_park_dashboard,
        realtime::handler::ws_upgrade,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::auth::LoginDto,
        model::auth::PasswordResetRequestDto,
        model::auth::PasswordResetConfirmDto,
        model::park::ParkDto,
        model::park::CreateParkDto,
        model::park::UpdateParkDto,
        model::user::UserRoleDto,
        model::user::UserDto,
        model::user::CreateUserDto,
        model::user::UpdateUserDto,
        model::user::PaginatedUsersDto,
        model::driver::DriverStatusDto,
        model::driver::DriverDto,
        model::driver::CreateDriverDto,
        model::driver::UpdateDriverDto,
        model::driver::PaginatedDriversDto,
        model::vehicle::VehicleStatusDto,
        model::vehicle::VehicleDto,
        model::vehicle::CreateVehicleDto,
        model::vehicle::UpdateVehicleDto,
        model::vehicle::AssignVehicleDriverDto,
        model::vehicle::PaginatedVehiclesDto,
        model::customer::CustomerDto,
        model::customer::CreateCustomerDto,
        model::customer::UpdateCustomerDto,
        model::customer::PaginatedCustomersDto,
        model::booking::BookingStatusDto,
        model::booking::BookingDto,
        model::booking::BookingDetailDto,
        model::booking::CreateBookingDto,
        model::booking::UpdateBookingDto,
        model::booking::AssignBookingDto,
        model::booking::UpdateBookingStatusDto,
        model::booking::PaginatedBookingsDto,
        model::setting::SettingDto,
        model::setting::UpsertSettingDto,
        model::notification::NotificationDto,
        model::notification::UnreadCountDto,
        model::notification::PaginatedNotificationsDto,
        model::analytics::BookingStatusBreakdownDto,
        model::analytics::DriverStatusBreakdownDto,
        model::analytics::VehicleStatusBreakdownDto,
        model::analytics::DailyBookingsDto,
        model::analytics::ParkDashboardDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Session login and password recovery"),
        (name = park::PARK_TAG, description = "Taxi park management"),
        (name = user::USER_TAG, description = "Staff account management"),
        (name = driver::DRIVER_TAG, description = "Driver roster management"),
        (name = vehicle::VEHICLE_TAG, description = "Vehicle fleet management"),
        (name = customer::CUSTOMER_TAG, description = "Customer registry"),
        (name = booking::BOOKING_TAG, description = "Trip booking lifecycle"),
        (name = setting::SETTING_TAG, description = "Per-park configuration"),
        (name = notification::NOTIFICATION_TAG, description = "In-app notifications"),
        (name = analytics::ANALYTICS_TAG, description = "Park dashboard aggregates"),
        (name = "realtime", description = "WebSocket event stream"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/auth/password-reset/request",
            post(auth::request_password_reset),
        )
        .route(
            "/api/auth/password-reset/confirm",
            post(auth::confirm_password_reset),
        )
        .route("/api/parks", post(park::create_park).get(park::get_parks))
        .route(
            "/api/parks/{park_id}",
            get(park::get_park)
                .put(park::update_park)
                .delete(park::delete_park),
        )
        .route(
            "/api/parks/{park_id}/settings",
            get(setting::get_settings),
        )
        .route(
            "/api/parks/{park_id}/settings/{key}",
            get(setting::get_setting)
                .put(setting::upsert_setting)
                .delete(setting::delete_setting),
        )
        .route(
            "/api/parks/{park_id}/dashboard",
            get(analytics::get_park_dashboard),
        )
        .route("/api/users", post(user::create_user).get(user::get_users))
        .route(
            "/api/users/{user_id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/drivers",
            post(driver::create_driver).get(driver::get_drivers),
        )
        .route(
            "/api/drivers/{driver_id}",
            get(driver::get_driver)
                .put(driver::update_driver)
                .delete(driver::delete_driver),
        )
        .route(
            "/api/vehicles",
            post(vehicle::create_vehicle).get(vehicle::get_vehicles),
        )
        .route(
            "/api/vehicles/{vehicle_id}",
            get(vehicle::get_vehicle)
                .put(vehicle::update_vehicle)
                .delete(vehicle::delete_vehicle),
        )
        .route(
            "/api/vehicles/{vehicle_id}/driver",
            put(vehicle::assign_vehicle_driver),
        )
        .route(
            "/api/customers",
            post(customer::create_customer).get(customer::get_customers),
        )
        .route(
            "/api/customers/{customer_id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route(
            "/api/bookings",
            post(booking::create_booking).get(booking::get_bookings),
        )
        .route(
            "/api/bookings/{booking_id}",
            get(booking::get_booking)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route(
            "/api/bookings/{booking_id}/assignment",
            put(booking::assign_booking),
        )
        .route(
            "/api/bookings/{booking_id}/status",
            put(booking::update_booking_status),
        )
        .route(
            "/api/notifications",
            get(notification::get_notifications),
        )
        .route(
            "/api/notifications/unread",
            get(notification::get_unread_count),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            post(notification::mark_notification_read),
        )
        .route(
            "/api/notifications/read-all",
            post(notification::mark_all_notifications_read),
        )
        .route("/api/realtime/ws", get(realtime::handler::ws_upgrade))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
