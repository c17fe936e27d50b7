//! Professor models and DTOs.

use academia_core::PaginationMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ProfessorId, SubjectId};
use crate::subjects::SubjectSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Professor {
    pub id: ProfessorId,
    pub first_name: String,
    pub last_name: String,
    pub subject_id: Option<SubjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProfessorSummary {
    pub id: ProfessorId,
    pub first_name: String,
    pub last_name: String,
}

/// Professor with the subject they teach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorDetail {
    pub id: ProfessorId,
    pub first_name: String,
    pub last_name: String,
    pub subject_id: Option<SubjectId>,
    pub subject: Option<SubjectSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfessorDetail {
    pub fn new(professor: Professor, subject: Option<SubjectSummary>) -> Self {
        Self {
            id: professor.id,
            first_name: professor.first_name,
            last_name: professor.last_name,
            subject_id: professor.subject_id,
            subject,
            created_at: professor.created_at,
            updated_at: professor.updated_at,
        }
    }
}

impl From<Professor> for ProfessorDetail {
    fn from(professor: Professor) -> Self {
        Self::new(professor, None)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProfessorDto {
    #[serde(alias = "nombre")]
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[serde(alias = "apellido")]
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "García")]
    pub last_name: String,
    #[serde(default, alias = "id_materia")]
    pub subject_id: Option<SubjectId>,
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessorDto {
    #[serde(default, alias = "nombre")]
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[serde(default, alias = "apellido")]
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[serde(default, alias = "id_materia")]
    pub subject_id: Option<SubjectId>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProfessorsResponse {
    pub data: Vec<ProfessorDetail>,
    pub meta: PaginationMeta,
}
