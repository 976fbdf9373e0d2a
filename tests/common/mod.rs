//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use gradebook::api::ApiServer;
use gradebook::service::GradebookService;
use gradebook::storage::{GradebookRepository, MemoryBackend, SqliteBackend};

/// A running API server bound to an ephemeral local port
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<gradebook::Result<()>>>,
    _temp_dir: Option<TempDir>,
}

impl TestServer {
    /// Serve an in-memory gradebook
    pub async fn memory() -> Result<Self> {
        Self::start(Arc::new(MemoryBackend::new()), None).await
    }

    /// Serve a gradebook stored in a fresh SQLite file
    pub async fn sqlite() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let backend = SqliteBackend::open(&temp_dir.path().join("gradebook.db"), 2).await?;
        Self::start(Arc::new(backend), Some(temp_dir)).await
    }

    async fn start(
        repository: Arc<dyn GradebookRepository>,
        temp_dir: Option<TempDir>,
    ) -> Result<Self> {
        repository.ensure_schema().await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let (tx, rx) = oneshot::channel::<()>();

        let server = ApiServer::new(GradebookService::new(repository), "127.0.0.1", 0);
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = rx.await;
        }));

        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
            handle: Some(handle),
            _temp_dir: temp_dir,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path`, returning status and JSON body
    pub async fn get(&self, path: &str) -> Result<(u16, Value)> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// POST to `path` with query parameters, returning status and JSON body
    pub async fn post(&self, path: &str, params: &[(&str, &str)]) -> Result<(u16, Value)> {
        let response = self.client.post(self.url(path)).query(params).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// Create a student and return its id
    pub async fn create_student(&self, name: &str) -> Result<i64> {
        let (status, body) = self.post("/students/", &[("name", name)]).await?;
        anyhow::ensure!(status == 200, "create student failed: {} {}", status, body);
        body["id"]
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("student without id: {}", body))
    }

    /// Record a grade and return the stored record
    pub async fn record_grade(&self, student_id: i64, subject: &str, grade: &str) -> Result<Value> {
        let id = student_id.to_string();
        let (status, body) = self
            .post(
                "/grades/",
                &[("student_id", id.as_str()), ("subject", subject), ("grade", grade)],
            )
            .await?;
        anyhow::ensure!(status == 200, "record grade failed: {} {}", status, body);
        Ok(body)
    }

    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await??;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
