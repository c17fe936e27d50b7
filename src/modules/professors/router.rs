use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_professor, delete_professor, get_professor, get_professors, update_professor,
};

pub fn init_professors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_professors).post(create_professor))
        .route(
            "/{id}",
            get(get_professor)
                .put(update_professor)
                .delete(delete_professor),
        )
}
