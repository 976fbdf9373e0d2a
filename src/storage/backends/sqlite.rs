//! SQLite storage backend

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::grading::LetterGrade;
use crate::models::{Grade, NewGrade, Student, StudentId};
use crate::storage::{
    config::StorageConfig,
    error::{StorageError, StorageResult},
    traits::GradebookRepository,
};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS grades (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL,
        subject TEXT NOT NULL,
        grade TEXT NOT NULL,
        created_at TEXT NOT NULL,
        FOREIGN KEY (student_id) REFERENCES students(id)
    );

    CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);
    CREATE INDEX IF NOT EXISTS idx_grades_student_id ON grades(student_id);
    CREATE INDEX IF NOT EXISTS idx_grades_subject ON grades(subject);
    CREATE INDEX IF NOT EXISTS idx_grades_grade ON grades(grade);
"#;

/// Store backed by a SQLite database file
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    /// Open (creating if needed) the database named in `config`
    pub async fn new(config: &StorageConfig) -> StorageResult<Self> {
        Self::open(&config.database_path, config.max_connections).await
    }

    pub async fn open(database_path: &Path, max_connections: u32) -> StorageResult<Self> {
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| {
                StorageError::connection(format!(
                    "Failed to open database at {}: {}",
                    database_path.display(),
                    e
                ))
            })?;

        info!("Opened SQLite database at {}", database_path.display());
        Ok(Self { pool })
    }

    fn student_from_row(row: &SqliteRow) -> StorageResult<Student> {
        Ok(Student {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }

    fn grade_from_row(row: &SqliteRow) -> StorageResult<Grade> {
        let id: i64 = row.try_get("id")?;
        let letter: String = row.try_get("grade")?;
        let grade = letter.parse::<LetterGrade>().map_err(|_| {
            StorageError::corrupt(format!("grade {} holds unrecognised letter '{}'", id, letter))
        })?;

        Ok(Grade {
            id,
            student_id: row.try_get("student_id")?,
            subject: row.try_get("subject")?,
            grade,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }
}

#[async_trait]
impl GradebookRepository for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        debug!("Database schema ensured");
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_student(&self, name: &str) -> StorageResult<Student> {
        let created_at = Utc::now();
        let result = sqlx::query("INSERT INTO students (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(Student {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            created_at,
        })
    }

    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        let rows = sqlx::query("SELECT id, name, created_at FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::student_from_row).collect()
    }

    async fn find_student(&self, id: StudentId) -> StorageResult<Option<Student>> {
        let row = sqlx::query("SELECT id, name, created_at FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::student_from_row).transpose()
    }

    async fn insert_grade(&self, grade: NewGrade) -> StorageResult<Grade> {
        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM students WHERE id = ?")
            .bind(grade.student_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(StorageError::not_found(format!(
                "student {}",
                grade.student_id
            )));
        }

        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO grades (student_id, subject, grade, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(grade.student_id)
        .bind(&grade.subject)
        .bind(grade.grade.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Grade {
            id: result.last_insert_rowid(),
            student_id: grade.student_id,
            subject: grade.subject,
            grade: grade.grade,
            created_at,
        })
    }

    async fn list_grades(&self) -> StorageResult<Vec<Grade>> {
        let rows = sqlx::query(
            "SELECT id, student_id, subject, grade, created_at FROM grades ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::grade_from_row).collect()
    }

    async fn list_grades_for_student(&self, id: StudentId) -> StorageResult<Vec<Grade>> {
        if self.find_student(id).await?.is_none() {
            return Err(StorageError::not_found(format!("student {}", id)));
        }

        let rows = sqlx::query(
            "SELECT id, student_id, subject, grade, created_at FROM grades \
             WHERE student_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::grade_from_row).collect()
    }
}
