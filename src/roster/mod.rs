mod cache;
pub mod handlers;
mod repo;

pub use cache::RosterCache;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
