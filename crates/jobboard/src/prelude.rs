//! Convenient imports for typical `jobboard` usage.
//!
//! ```ignore
//! use jobboard::prelude::*;
//! ```

pub use crate::{
    ColumnMap, Company, FromRow, GenericClient, Job, JobDetail, JobFilter, JobListing, JobPatch,
    JobStore, NewJob, RowExt, StoreError, StoreResult, UpdateSet,
};

#[cfg(feature = "pool")]
pub use crate::{create_pool, create_pool_with_config};
