//! Common test utilities for railqr
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestHarness, fixtures::BatchRequestFactory};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let harness = TestHarness::new().await;
//!     let app = actix_web::test::init_service(harness.app()).await;
//!     // ...
//! }
//! ```

pub mod app;
pub mod assertions;
pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use app::TestHarness;
pub use database::TestDatabase;
pub use fixtures::{BatchRequestFactory, CodeRecordFactory};
