mod dto;
pub mod handlers;
mod store;

pub use store::SessionStore;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
