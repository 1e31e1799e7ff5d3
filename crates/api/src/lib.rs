pub mod error;
pub mod request;
pub mod routes;
pub mod state;

use axum::Router;

pub fn app() -> Router {
    app_with_state(state::AppState::new())
}

pub fn app_with_state(state: state::AppState) -> Router {
    routes::router(state)
}
