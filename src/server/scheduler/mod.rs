//! Background cron jobs.

pub mod otp_purge;
