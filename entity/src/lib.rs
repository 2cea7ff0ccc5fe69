//! SeaORM entity models for the fleetdesk database schema.

pub mod booking;
pub mod customer;
pub mod driver;
pub mod notification;
pub mod park;
pub mod password_reset_otp;
pub mod setting;
pub mod user;
pub mod vehicle;

pub mod prelude {
    pub use super::booking::Entity as Booking;
    pub use super::customer::Entity as Customer;
    pub use super::driver::Entity as Driver;
    pub use super::notification::Entity as Notification;
    pub use super::park::Entity as Park;
    pub use super::password_reset_otp::Entity as PasswordResetOtp;
    pub use super::setting::Entity as Setting;
    pub use super::user::Entity as User;
    pub use super::vehicle::Entity as Vehicle;
}
