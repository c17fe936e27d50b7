use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use academia_auth::{Claims, Identity};
use academia_core::{ErrorResponse, MessageResponse, PaginationMeta, PaginationParams};
use academia_models::{
    CreateFacultyDto, CreateProfessorDto, CreateProgramDto, CreateSubjectDto, Faculty,
    FacultyDetail, FacultyId, FacultySummary, PaginatedFacultiesResponse,
    PaginatedProfessorsResponse, PaginatedProgramsResponse, PaginatedSubjectsResponse, Professor,
    ProfessorDetail, ProfessorId, ProfessorSummary, Program, ProgramDetail, ProgramId, ProgramRef,
    ProgramSummary, Subject, SubjectDetail, SubjectId, SubjectSummary, TokenResponse,
    UpdateFacultyDto, UpdateProfessorDto, UpdateProgramDto, UpdateSubjectDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::faculties::controller::get_faculties,
        crate::modules::faculties::controller::create_faculty,
        crate::modules::faculties::controller::get_faculty,
        crate::modules::faculties::controller::update_faculty,
        crate::modules::faculties::controller::delete_faculty,
        crate::modules::programs::controller::get_programs,
        crate::modules::programs::controller::create_program,
        crate::modules::programs::controller::get_program,
        crate::modules::programs::controller::update_program,
        crate::modules::programs::controller::delete_program,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::professors::controller::get_professors,
        crate::modules::professors::controller::create_professor,
        crate::modules::professors::controller::get_professor,
        crate::modules::professors::controller::update_professor,
        crate::modules::professors::controller::delete_professor,
    ),
    components(
        schemas(
            Identity,
            Claims,
            TokenResponse,
            ErrorResponse,
            MessageResponse,
            PaginationMeta,
            PaginationParams,
            FacultyId,
            ProgramId,
            SubjectId,
            ProfessorId,
            Faculty,
            FacultySummary,
            FacultyDetail,
            CreateFacultyDto,
            UpdateFacultyDto,
            PaginatedFacultiesResponse,
            Program,
            ProgramSummary,
            ProgramRef,
            ProgramDetail,
            CreateProgramDto,
            UpdateProgramDto,
            PaginatedProgramsResponse,
            Subject,
            SubjectSummary,
            SubjectDetail,
            CreateSubjectDto,
            UpdateSubjectDto,
            PaginatedSubjectsResponse,
            Professor,
            ProfessorSummary,
            ProfessorDetail,
            CreateProfessorDto,
            UpdateProfessorDto,
            PaginatedProfessorsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuing. Identities are self-asserted"),
        (name = "Faculties", description = "Faculty management"),
        (name = "Programs", description = "Degree program management"),
        (name = "Subjects", description = "Subject management"),
        (name = "Professors", description = "Professor management")
    ),
    info(
        title = "Academia API",
        version = "0.1.0",
        description = "Academic records REST API: faculties, degree programs, subjects and professors, gated by short-lived bearer tokens.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_paths_are_documented_with_bearer_auth() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/faculties",
            "/api/faculties/{id}",
            "/api/programs",
            "/api/programs/{id}",
            "/api/subjects",
            "/api/subjects/{id}",
            "/api/professors",
            "/api/professors/{id}",
        ] {
            let item = doc.paths.paths.get(path).unwrap_or_else(|| panic!("{path}"));
            let get = item.get.as_ref().unwrap();
            assert!(get.security.is_some(), "{path}");
        }

        let login = doc.paths.paths.get("/api/auth/login").unwrap();
        assert!(login.post.as_ref().unwrap().security.is_none());
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
