//! Job records and their PostgreSQL store.
//!
//! Statement text and parameter lists are assembled by pure `build_*`
//! functions; the async methods on [`JobStore`] only execute them and map
//! rows. Pass a transaction anywhere a client is expected to compose
//! operations atomically.

use crate::client::GenericClient;
use crate::error::{StoreError, StoreResult};
use crate::filter::JobFilter;
use crate::param::ParamList;
use crate::row::{FromRow, RowExt};
use crate::update::{ColumnMap, UpdateSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use tracing::debug;

/// A persisted job posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Fraction in [0.0, 1.0]; NUMERIC in the store.
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl FromRow for Job {
    fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
        })
    }
}

/// A job row in list results, carrying the company display name from the
/// join. A dangling `company_handle` yields a null name, not a dropped row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
    pub company_name: Option<String>,
}

impl FromRow for JobListing {
    fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
            company_name: row.try_get_column("company_name")?,
        })
    }
}

/// Descriptive company fields attached to a fetched job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl FromRow for Company {
    fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            handle: row.try_get_column("handle")?,
            name: row.try_get_column("name")?,
            description: row.try_get_column("description")?,
            num_employees: row.try_get_column("num_employees")?,
            logo_url: row.try_get_column("logo_url")?,
        })
    }
}

/// A single job with its company detail merged in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company: Option<Company>,
}

/// Input for creating a job. Shape validation happens upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// A partial update: only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: Option<String>,
}

impl JobPatch {
    /// Collect supplied fields under their wire names, in declaration order.
    fn into_update_set(self) -> UpdateSet {
        UpdateSet::new()
            .set_opt("title", self.title)
            .set_opt("salary", self.salary)
            .set_opt("equity", self.equity)
            .set_opt("companyHandle", self.company_handle)
    }
}

/// Wire field names that differ from their physical columns.
fn job_columns() -> ColumnMap {
    ColumnMap::new().map("companyHandle", "company_handle")
}

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

fn build_list_query(filter: &JobFilter) -> (String, ParamList) {
    let mut sql = String::from(
        "SELECT j.id, j.title, j.salary, j.equity, j.company_handle, \
                c.name AS company_name \
         FROM jobs j \
         LEFT JOIN companies c ON j.company_handle = c.handle",
    );
    let (where_sql, params) = filter.build();
    if !where_sql.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_sql);
    }
    sql.push_str(" ORDER BY j.title");
    (sql, params)
}

fn build_update_query(id: i32, patch: JobPatch) -> StoreResult<(String, ParamList)> {
    let (set_sql, mut params) = patch.into_update_set().compile(&job_columns())?;
    // The lookup key rides as the final positional parameter, after every
    // SET placeholder.
    let key_idx = params.push(id);
    let sql =
        format!("UPDATE jobs SET {set_sql} WHERE id = ${key_idx} RETURNING {JOB_COLUMNS}");
    Ok((sql, params))
}

/// Store for the `jobs` table.
pub struct JobStore;

impl JobStore {
    /// Insert a new job and return it as persisted, id included.
    ///
    /// A duplicate title is a [`StoreError::Conflict`]; an unknown company
    /// handle is a [`StoreError::InvalidArgument`].
    pub async fn create(conn: &impl GenericClient, job: NewJob) -> StoreResult<Job> {
        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {JOB_COLUMNS}"
        );
        debug!(sql = %sql, title = %job.title, "creating job");
        let row = conn
            .query_one(
                &sql,
                &[&job.title, &job.salary, &job.equity, &job.company_handle],
            )
            .await?;
        Job::from_row(&row)
    }

    /// List jobs matching `filter`, ordered by title.
    ///
    /// An empty filter returns every job. An empty result is not an error.
    pub async fn find_all(
        conn: &impl GenericClient,
        filter: &JobFilter,
    ) -> StoreResult<Vec<JobListing>> {
        let (sql, params) = build_list_query(filter);
        debug!(sql = %sql, params = params.len(), "listing jobs");
        let rows = conn.query(&sql, &params.as_refs()).await?;
        rows.iter().map(JobListing::from_row).collect()
    }

    /// Fetch a single job by id, with its company detail merged in.
    pub async fn get(conn: &impl GenericClient, id: i32) -> StoreResult<JobDetail> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        debug!(sql = %sql, id, "fetching job");
        let row = conn
            .query_opt(&sql, &[&id])
            .await?
            .ok_or_else(|| StoreError::not_found(format!("no job: {id}")))?;
        let job = Job::from_row(&row)?;

        let company = conn
            .query_opt(
                "SELECT handle, name, description, num_employees, logo_url \
                 FROM companies WHERE handle = $1",
                &[&job.company_handle],
            )
            .await?
            .as_ref()
            .map(Company::from_row)
            .transpose()?;

        Ok(JobDetail {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
            company,
        })
    }

    /// Apply a partial update and return the updated row.
    ///
    /// An empty patch is a [`StoreError::InvalidArgument`]; an id matching
    /// zero rows is [`StoreError::NotFound`]. RETURNING makes "existed and
    /// was updated" a single atomic statement, so there is no read-then-write
    /// race to lose.
    pub async fn update(
        conn: &impl GenericClient,
        id: i32,
        patch: JobPatch,
    ) -> StoreResult<Job> {
        let (sql, params) = build_update_query(id, patch)?;
        debug!(sql = %sql, id, "updating job");
        let row = conn
            .query_opt(&sql, &params.as_refs())
            .await?
            .ok_or_else(|| StoreError::not_found(format!("no job: {id}")))?;
        Job::from_row(&row)
    }

    /// Delete a job by id.
    ///
    /// Deleting an id that matches zero rows is [`StoreError::NotFound`],
    /// never a silent no-op.
    pub async fn remove(conn: &impl GenericClient, id: i32) -> StoreResult<()> {
        debug!(id, "deleting job");
        let affected = conn
            .execute("DELETE FROM jobs WHERE id = $1", &[&id])
            .await?;
        if affected == 0 {
            return Err(StoreError::not_found(format!("no job: {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_without_filter_has_no_where() {
        let (sql, params) = build_list_query(&JobFilter::new());
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY j.title"));
        assert!(sql.contains("LEFT JOIN companies"));
        assert!(params.is_empty());
    }

    #[test]
    fn list_query_appends_filter_fragment() {
        let filter = JobFilter::new().title("eng").min_salary(50_000).has_equity(true);
        let (sql, params) = build_list_query(&filter);
        assert!(sql.contains(" WHERE title ILIKE $1 AND salary >= $2 AND equity > 0 "));
        assert!(sql.ends_with("ORDER BY j.title"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn update_query_places_key_after_set_params() {
        let patch = JobPatch {
            salary: Some(120),
            ..JobPatch::default()
        };
        let (sql, params) = build_update_query(7, patch).unwrap();
        assert_eq!(
            sql,
            "UPDATE jobs SET \"salary\"=$1 WHERE id = $2 \
             RETURNING id, title, salary, equity, company_handle"
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn update_query_translates_company_handle() {
        let patch = JobPatch {
            company_handle: Some("c2".into()),
            ..JobPatch::default()
        };
        let (sql, _) = build_update_query(1, patch).unwrap();
        assert!(sql.contains(r#""company_handle"=$1"#));
        assert!(!sql.contains("companyHandle"));
    }

    #[test]
    fn empty_patch_is_invalid_argument() {
        let err = build_update_query(1, JobPatch::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn listing_serializes_with_camel_case_keys() {
        let listing = JobListing {
            id: 1,
            title: "j1".into(),
            salary: Some(100),
            equity: Some("0.1".parse().unwrap()),
            company_handle: "c1".into(),
            company_name: None,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["companyHandle"], "c1");
        assert_eq!(json["companyName"], serde_json::Value::Null);
        assert_eq!(json["equity"], "0.1");
    }

    #[test]
    fn patch_deserializes_wire_names() {
        let patch: JobPatch =
            serde_json::from_str(r#"{"salary": 120, "companyHandle": "c2"}"#).unwrap();
        assert_eq!(patch.salary, Some(120));
        assert_eq!(patch.company_handle.as_deref(), Some("c2"));
        assert!(patch.title.is_none());
    }
}
