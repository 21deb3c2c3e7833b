// src/core/database.rs
//! Job store backed by SQLite - connection management, migrations, and the
//! job/application repositories.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

// ===== Connection Management =====

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection with automatic setup.
    pub async fn new(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| {
                        format!("Failed to create database directory: {}", parent.display())
                    })?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        info!(
            "Database connection established: {}",
            database_path.display()
        );

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get pool reference for repository construction.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations.
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS jobs (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                job_type TEXT NOT NULL,
                category TEXT NOT NULL,
                location_city TEXT,
                location_state TEXT,
                salary_min INTEGER NOT NULL,
                salary_max INTEGER NOT NULL,
                salary_period TEXT,
                employer_display_name TEXT,
                description TEXT,
                status TEXT NOT NULL DEFAULT 'active',
                is_urgent BOOLEAN NOT NULL DEFAULT FALSE,
                is_verified BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS applications (
                id TEXT PRIMARY KEY,
                job_id TEXT NOT NULL,
                applicant_id TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'applied',
                created_at TEXT NOT NULL,
                UNIQUE (job_id, applicant_id)
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_jobs_status_created ON jobs(status, created_at);",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_applications_job ON applications(job_id);",
        )
        .execute(&self.pool)
        .await?;

        info!("Database migrations completed");
        Ok(())
    }

    /// Check database health.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }
}

// ===== Row Models =====

/// A job row as stored - structured salary bounds and a real timestamp.
/// The listings loader flattens this into the canonical record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub job_type: String,
    pub category: String,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub salary_period: Option<String>,
    pub employer_display_name: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub is_urgent: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a new posting. Ids and timestamps are assigned by the
/// repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub job_type: String,
    pub category: String,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub salary_period: Option<String>,
    pub employer_display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ApplicationRow {
    pub id: String,
    pub job_id: String,
    pub applicant_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ===== Job Repository =====

pub struct JobRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JobRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch one page of active jobs, newest first.
    pub async fn fetch_active_page(&self, page_index: u32, page_size: u32) -> Result<Vec<JobRow>> {
        let offset = i64::from(page_index) * i64::from(page_size);

        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, job_type, category, location_city, location_state,
                   salary_min, salary_max, salary_period, employer_display_name,
                   description, status, is_urgent, is_verified, created_at
            FROM jobs
            WHERE status = 'active'
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(self.pool)
        .await
        .context("Failed to fetch jobs page")?;

        Ok(rows)
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<Option<JobRow>> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, job_type, category, location_city, location_state,
                   salary_min, salary_max, salary_period, employer_display_name,
                   description, status, is_urgent, is_verified, created_at
            FROM jobs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .context("Failed to fetch job by id")?;

        Ok(row)
    }

    /// Insert a new active posting. The creation instant is supplied by the
    /// caller so seeded data can carry staggered posting times.
    pub async fn insert(&self, job: NewJob, created_at: DateTime<Utc>) -> Result<JobRow> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO jobs (id, title, job_type, category, location_city, location_state,
                              salary_min, salary_max, salary_period, employer_display_name,
                              description, status, is_urgent, is_verified, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'active', ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&job.title)
        .bind(&job.job_type)
        .bind(&job.category)
        .bind(&job.location_city)
        .bind(&job.location_state)
        .bind(job.salary_min)
        .bind(job.salary_max)
        .bind(&job.salary_period)
        .bind(&job.employer_display_name)
        .bind(&job.description)
        .bind(job.is_urgent)
        .bind(job.is_verified)
        .bind(created_at)
        .execute(self.pool)
        .await
        .context("Failed to insert job")?;

        info!("Created job posting: {} ({})", job.title, id);

        Ok(JobRow {
            id,
            title: job.title,
            job_type: job.job_type,
            category: job.category,
            location_city: job.location_city,
            location_state: job.location_state,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            salary_period: job.salary_period,
            employer_display_name: job.employer_display_name,
            description: job.description,
            status: "active".to_string(),
            is_urgent: job.is_urgent,
            is_verified: job.is_verified,
            created_at,
        })
    }

    pub async fn count_active(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE status = 'active'")
            .fetch_one(self.pool)
            .await
            .context("Failed to count active jobs")?;
        Ok(count.0)
    }

    /// Mark a posting closed. Returns false when no active job matched.
    pub async fn deactivate(&self, id: &str) -> Result<bool> {
        let result =
            sqlx::query("UPDATE jobs SET status = 'closed' WHERE id = ? AND status = 'active'")
                .bind(id)
                .execute(self.pool)
                .await
                .context("Failed to deactivate job")?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Deactivated job: {}", id);
        }

        Ok(updated)
    }
}

// ===== Application Repository =====

pub struct ApplicationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether this applicant already applied to this job.
    pub async fn exists(&self, job_id: &str, applicant_id: &str) -> Result<bool> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM applications WHERE job_id = ? AND applicant_id = ?",
        )
        .bind(job_id)
        .bind(applicant_id)
        .fetch_one(self.pool)
        .await
        .context("Failed to check for existing application")?;

        Ok(count.0 > 0)
    }

    pub async fn insert(&self, job_id: &str, applicant_id: &str) -> Result<ApplicationRow> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO applications (id, job_id, applicant_id, status, created_at)
            VALUES (?, ?, ?, 'applied', ?)
            "#,
        )
        .bind(&id)
        .bind(job_id)
        .bind(applicant_id)
        .bind(now)
        .execute(self.pool)
        .await
        .context("Failed to insert application")?;

        info!("Recorded application {} for job {}", id, job_id);

        Ok(ApplicationRow {
            id,
            job_id: job_id.to_string(),
            applicant_id: applicant_id.to_string(),
            status: "applied".to_string(),
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_db_path() -> PathBuf {
        std::env::temp_dir().join(format!("rozgar-test-{}.db", uuid::Uuid::new_v4()))
    }

    fn posting(title: &str, category: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            job_type: "Full-time".to_string(),
            category: category.to_string(),
            location_city: Some("Mumbai".to_string()),
            location_state: Some("Maharashtra".to_string()),
            salary_min: 15000,
            salary_max: 22000,
            salary_period: Some("month".to_string()),
            employer_display_name: Some("Acme Services".to_string()),
            description: None,
            is_urgent: false,
            is_verified: true,
        }
    }

    #[tokio::test]
    async fn test_insert_and_page_ordering() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();
        let repo = JobRepository::new(db.pool());

        let base = Utc::now();
        repo.insert(posting("Oldest", "Plumbing"), base - chrono::Duration::days(3))
            .await
            .unwrap();
        repo.insert(posting("Middle", "Driving"), base - chrono::Duration::days(1))
            .await
            .unwrap();
        repo.insert(posting("Newest", "Cooking"), base).await.unwrap();

        let page = repo.fetch_active_page(0, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "Newest");
        assert_eq!(page[1].title, "Middle");

        let page = repo.fetch_active_page(1, 2).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "Oldest");

        assert_eq!(repo.count_active().await.unwrap(), 3);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_deactivated_jobs_leave_the_page() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();
        let repo = JobRepository::new(db.pool());

        let row = repo
            .insert(posting("Guard", "Security"), Utc::now())
            .await
            .unwrap();
        assert!(repo.deactivate(&row.id).await.unwrap());
        assert!(!repo.deactivate(&row.id).await.unwrap());

        assert!(repo.fetch_active_page(0, 10).await.unwrap().is_empty());
        assert_eq!(repo.count_active().await.unwrap(), 0);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_application_precondition() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();
        let jobs = JobRepository::new(db.pool());
        let applications = ApplicationRepository::new(db.pool());

        let job = jobs
            .insert(posting("Cook", "Cooking"), Utc::now())
            .await
            .unwrap();

        assert!(!applications.exists(&job.id, "worker-1").await.unwrap());
        applications.insert(&job.id, "worker-1").await.unwrap();
        assert!(applications.exists(&job.id, "worker-1").await.unwrap());

        // the unique constraint backs up the exists() precondition
        assert!(applications.insert(&job.id, "worker-1").await.is_err());
        let _ = std::fs::remove_file(&path);
    }
}
