use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::Result;
use crate::models::{Grade, Student, StudentId};
use crate::reports::{GradeDistribution, RankedStudent, Report, StudentAverage};
use crate::service::GradebookService;

#[derive(Debug, Deserialize)]
pub(super) struct CreateStudentParams {
    name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateGradeParams {
    student_id: StudentId,
    subject: String,
    grade: String,
}

pub(super) async fn health_check(
    State(service): State<GradebookService>,
) -> (StatusCode, Json<Value>) {
    let backend = service.repository().backend_name();
    match service.repository().health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "backend": backend })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "backend": backend })),
            )
        }
    }
}

pub(super) async fn create_student(
    State(service): State<GradebookService>,
    Query(params): Query<CreateStudentParams>,
) -> Result<Json<Student>> {
    Ok(Json(service.create_student(&params.name).await?))
}

pub(super) async fn list_students(
    State(service): State<GradebookService>,
) -> Result<Json<Vec<Student>>> {
    Ok(Json(service.list_students().await?))
}

pub(super) async fn create_grade(
    State(service): State<GradebookService>,
    Query(params): Query<CreateGradeParams>,
) -> Result<Json<Grade>> {
    let grade = service
        .record_grade(params.student_id, &params.subject, &params.grade)
        .await?;
    Ok(Json(grade))
}

pub(super) async fn list_grades(State(service): State<GradebookService>) -> Result<Json<Vec<Grade>>> {
    Ok(Json(service.list_grades().await?))
}

pub(super) async fn student_grades(
    State(service): State<GradebookService>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Vec<Grade>>> {
    Ok(Json(service.student_grades(student_id).await?))
}

pub(super) async fn average_grades(
    State(service): State<GradebookService>,
) -> Result<Json<Report<Vec<StudentAverage>>>> {
    Ok(Json(service.average_grades_report().await?))
}

pub(super) async fn top_students(
    State(service): State<GradebookService>,
) -> Result<Json<Report<Vec<RankedStudent>>>> {
    Ok(Json(service.top_students_report().await?))
}

pub(super) async fn grade_distribution(
    State(service): State<GradebookService>,
) -> Result<Json<Report<GradeDistribution>>> {
    Ok(Json(service.grade_distribution_report().await?))
}
