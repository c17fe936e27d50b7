//! # Academia Models
//!
//! Domain models and DTOs for the Academia API.
//!
//! - [`ids`]: typed UUID ids
//! - [`faculties`], [`programs`], [`subjects`], [`professors`]: entity rows,
//!   summaries embedded in related entities, detail views and request DTOs
//! - [`auth`]: login response
//!
//! Request DTOs take English keys and also accept the Spanish keys of the
//! first API version (`nombre`, `apellido`, `id_facultad`, `id_carrera`,
//! `id_materia`).

pub mod auth;
pub mod faculties;
pub mod ids;
pub mod professors;
pub mod programs;
pub mod subjects;

pub use auth::TokenResponse;
pub use faculties::{
    CreateFacultyDto, Faculty, FacultyDetail, FacultySummary, PaginatedFacultiesResponse,
    UpdateFacultyDto,
};
pub use ids::{FacultyId, ProfessorId, ProgramId, SubjectId};
pub use professors::{
    CreateProfessorDto, PaginatedProfessorsResponse, Professor, ProfessorDetail,
    ProfessorSummary, UpdateProfessorDto,
};
pub use programs::{
    CreateProgramDto, PaginatedProgramsResponse, Program, ProgramDetail, ProgramRef,
    ProgramSummary, UpdateProgramDto,
};
pub use subjects::{
    CreateSubjectDto, PaginatedSubjectsResponse, Subject, SubjectDetail, SubjectSummary,
    UpdateSubjectDto,
};
