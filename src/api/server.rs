//! HTTP server wiring

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{
    average_grades, create_grade, create_student, grade_distribution, health_check, list_grades,
    list_students, student_grades, top_students,
};
use crate::error::Result;
use crate::service::GradebookService;

/// API server for the gradebook endpoints
pub struct ApiServer {
    service: GradebookService,
    host: String,
    port: u16,
}

impl ApiServer {
    pub fn new(service: GradebookService, host: impl Into<String>, port: u16) -> Self {
        Self {
            service,
            host: host.into(),
            port,
        }
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let local: SocketAddr = listener.local_addr()?;
        info!("Starting gradebook API server on {}", local);

        axum::serve(listener, build_router(self.service))
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Gradebook API server stopped");
        Ok(())
    }
}

/// Build the API router
pub fn build_router(service: GradebookService) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/students/", post(create_student).get(list_students))
        .route("/students", post(create_student).get(list_students))
        .route("/grades/", post(create_grade).get(list_grades))
        .route("/grades", post(create_grade).get(list_grades))
        .route("/students/{student_id}/grades/", get(student_grades))
        .route("/students/{student_id}/grades", get(student_grades))
        .route("/reports/average_grades/", get(average_grades))
        .route("/reports/average_grades", get(average_grades))
        .route("/reports/top-students/", get(top_students))
        .route("/reports/top-students", get(top_students))
        .route("/reports/grade-distribution/", get(grade_distribution))
        .route("/reports/grade-distribution", get(grade_distribution))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
