mod booking;
mod customer;
mod driver;
mod notification;
mod password_reset_otp;
mod setting;
mod user;
