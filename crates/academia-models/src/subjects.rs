//! Subject models and DTOs.

use academia_core::PaginationMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ProgramId, SubjectId};
use crate::professors::ProfessorSummary;
use crate::programs::ProgramRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub program_id: Option<ProgramId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SubjectSummary {
    pub id: SubjectId,
    pub name: String,
}

/// Subject with its program and professors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDetail {
    pub id: SubjectId,
    pub name: String,
    pub program_id: Option<ProgramId>,
    pub program: Option<ProgramRef>,
    pub professors: Vec<ProfessorSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubjectDetail {
    pub fn new(
        subject: Subject,
        program: Option<ProgramRef>,
        professors: Vec<ProfessorSummary>,
    ) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            program_id: subject.program_id,
            program,
            professors,
            created_at: subject.created_at,
            updated_at: subject.updated_at,
        }
    }
}

impl From<Subject> for SubjectDetail {
    fn from(subject: Subject) -> Self {
        Self::new(subject, None, Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectDto {
    #[serde(alias = "nombre")]
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Algoritmos y Estructuras de Datos")]
    pub name: String,
    #[serde(default, alias = "id_carrera")]
    pub program_id: Option<ProgramId>,
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSubjectDto {
    #[serde(default, alias = "nombre")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, alias = "id_carrera")]
    pub program_id: Option<ProgramId>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSubjectsResponse {
    pub data: Vec<SubjectDetail>,
    pub meta: PaginationMeta,
}
