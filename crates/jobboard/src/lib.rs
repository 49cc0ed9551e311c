//! # jobboard
//!
//! A small PostgreSQL-backed record store for job postings.
//!
//! ## Features
//!
//! - **SQL explicit**: statements are hand-written text with `$n` placeholders;
//!   the dynamic parts (partial-update SET clauses, search WHERE clauses) are
//!   compiled by dedicated builders that keep values out of SQL syntax
//! - **Type-safe mapping**: Row -> Struct via the [`FromRow`] trait
//! - **Transaction-friendly**: pass a transaction anywhere a
//!   [`GenericClient`] is expected
//! - **Typed failures**: not-found, conflict, and caller-bug cases surface as
//!   distinct [`StoreError`] variants the route layer can map to statuses
//!
//! ## Example
//!
//! ```ignore
//! use jobboard::prelude::*;
//!
//! let pool = jobboard::create_pool("postgres://localhost/jobs")?;
//! let client = pool.get().await?;
//!
//! let senior = JobStore::find_all(
//!     &client,
//!     &JobFilter::new().title("engineer").min_salary(150_000),
//! )
//! .await?;
//!
//! let patched = JobStore::update(
//!     &client,
//!     senior[0].id,
//!     JobPatch { salary: Some(160_000), ..JobPatch::default() },
//! )
//! .await?;
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod jobs;
pub mod param;
pub mod row;
pub mod update;

pub use client::GenericClient;
pub use error::{StoreError, StoreResult};
pub use filter::JobFilter;
pub use jobs::{Company, Job, JobDetail, JobListing, JobPatch, JobStore, NewJob};
pub use param::{Param, ParamList};
pub use row::{FromRow, RowExt};
pub use update::{ColumnMap, UpdateSet};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};

pub mod prelude;
