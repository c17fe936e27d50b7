use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_program, delete_program, get_program, get_programs, update_program};

pub fn init_programs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_programs).post(create_program))
        .route(
            "/{id}",
            get(get_program).put(update_program).delete(delete_program),
        )
}
