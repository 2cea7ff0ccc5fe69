//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert request
//! DTOs into parameter models, call the matching service, and convert domain
//! results back into response DTOs.

use serde::Deserialize;

pub mod analytics;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod driver;
pub mod notification;
pub mod park;
pub mod setting;
pub mod user;
pub mod vehicle;

const MAX_PER_PAGE: u64 = 100;

/// Common pagination query parameters. Pages are 1-based.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

impl PaginationParams {
    /// Clamps the parameters to sane bounds.
    pub fn clamp(self) -> (u64, u64) {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        (page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_pagination() {
        let (page, per_page) = PaginationParams {
            page: 0,
            per_page: 0,
        }
        .clamp();
        assert_eq!(page, 1);
        assert_eq!(per_page, 1);

        let (_, per_page) = PaginationParams {
            page: 3,
            per_page: 10_000,
        }
        .clamp();
        assert_eq!(per_page, MAX_PER_PAGE);
    }
}
