//! Faculty models and DTOs.

use academia_core::PaginationMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::FacultyId;
use crate::programs::ProgramSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    pub director: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Faculty as embedded in a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FacultySummary {
    pub id: FacultyId,
    pub name: String,
    pub director: Option<String>,
}

/// Faculty with its programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FacultyDetail {
    pub id: FacultyId,
    pub name: String,
    pub director: Option<String>,
    pub programs: Vec<ProgramSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FacultyDetail {
    pub fn new(faculty: Faculty, programs: Vec<ProgramSummary>) -> Self {
        Self {
            id: faculty.id,
            name: faculty.name,
            director: faculty.director,
            programs,
            created_at: faculty.created_at,
            updated_at: faculty.updated_at,
        }
    }
}

impl From<Faculty> for FacultyDetail {
    fn from(faculty: Faculty) -> Self {
        Self::new(faculty, Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFacultyDto {
    #[serde(alias = "nombre")]
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Facultad de Ingeniería")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub director: Option<String>,
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFacultyDto {
    #[serde(default, alias = "nombre")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub director: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedFacultiesResponse {
    pub data: Vec<FacultyDetail>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_faculty_dto_validation() {
        let valid = CreateFacultyDto {
            name: "Ingeniería".to_string(),
            director: Some("Dra. Pérez".to_string()),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateFacultyDto {
            name: "".to_string(),
            director: None,
        };
        assert!(empty_name.validate().is_err());

        let long_name = CreateFacultyDto {
            name: "x".repeat(256),
            director: None,
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_create_faculty_dto_accepts_spanish_keys() {
        let dto: CreateFacultyDto =
            serde_json::from_str(r#"{"nombre":"Ciencias","director":"Gómez"}"#).unwrap();
        assert_eq!(dto.name, "Ciencias");
        assert_eq!(dto.director.as_deref(), Some("Gómez"));
    }

    #[test]
    fn test_empty_update_is_valid() {
        let dto: UpdateFacultyDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.name.is_none());
    }
}
