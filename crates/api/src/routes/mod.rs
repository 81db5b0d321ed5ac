//! API route definitions.

use axum::{Router, middleware};

use crate::{
    AppState,
    middleware::{api_key_middleware, auth_middleware},
};

pub mod auth;
pub mod budgets;
pub mod documents;
pub mod health;
pub mod purchase_orders;
pub mod users;

/// Creates the `/api/v1` router: public, bearer-protected and API-key routes.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(budgets::routes())
        .merge(purchase_orders::routes())
        .merge(users::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let attachment_routes = documents::routes().layer(middleware::from_fn_with_state(
        state,
        api_key_middleware,
    ));

    Router::new()
        .merge(auth::routes())
        .merge(protected_routes)
        .merge(attachment_routes)
}
