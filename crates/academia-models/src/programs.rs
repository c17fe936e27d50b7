//! Degree program models and DTOs.

use academia_core::PaginationMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::faculties::FacultySummary;
use crate::ids::{FacultyId, ProgramId};
use crate::subjects::SubjectSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    pub faculty_id: Option<FacultyId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Program as listed under its faculty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProgramSummary {
    pub id: ProgramId,
    pub name: String,
}

/// Program as embedded in a subject, with its own parent reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProgramRef {
    pub id: ProgramId,
    pub name: String,
    pub faculty_id: Option<FacultyId>,
}

/// Program with its faculty and subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgramDetail {
    pub id: ProgramId,
    pub name: String,
    pub faculty_id: Option<FacultyId>,
    pub faculty: Option<FacultySummary>,
    pub subjects: Vec<SubjectSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProgramDetail {
    pub fn new(
        program: Program,
        faculty: Option<FacultySummary>,
        subjects: Vec<SubjectSummary>,
    ) -> Self {
        Self {
            id: program.id,
            name: program.name,
            faculty_id: program.faculty_id,
            faculty,
            subjects,
            created_at: program.created_at,
            updated_at: program.updated_at,
        }
    }
}

impl From<Program> for ProgramDetail {
    fn from(program: Program) -> Self {
        Self::new(program, None, Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProgramDto {
    #[serde(alias = "nombre")]
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Ingeniería en Informática")]
    pub name: String,
    #[serde(default, alias = "id_facultad")]
    pub faculty_id: Option<FacultyId>,
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProgramDto {
    #[serde(default, alias = "nombre")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, alias = "id_facultad")]
    pub faculty_id: Option<FacultyId>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProgramsResponse {
    pub data: Vec<ProgramDetail>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_program_dto_accepts_spanish_keys() {
        let faculty_id = FacultyId::new();
        let json = format!(r#"{{"nombre":"Sistemas","id_facultad":"{}"}}"#, faculty_id);
        let dto: CreateProgramDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto.name, "Sistemas");
        assert_eq!(dto.faculty_id, Some(faculty_id));
    }

    #[test]
    fn test_create_program_dto_without_faculty() {
        let dto: CreateProgramDto = serde_json::from_str(r#"{"name":"Sistemas"}"#).unwrap();
        assert!(dto.faculty_id.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_detail_from_program_has_no_relations() {
        let now = Utc::now();
        let detail = ProgramDetail::from(Program {
            id: ProgramId::new(),
            name: "Sistemas".to_string(),
            faculty_id: None,
            created_at: now,
            updated_at: now,
        });
        assert!(detail.faculty.is_none());
        assert!(detail.subjects.is_empty());
    }
}
