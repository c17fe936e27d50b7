use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_faculty, delete_faculty, get_faculties, get_faculty, update_faculty,
};

pub fn init_faculties_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_faculties).post(create_faculty))
        .route(
            "/{id}",
            get(get_faculty).put(update_faculty).delete(delete_faculty),
        )
}
