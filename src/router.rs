use axum::Router;

use crate::{AppState, middleware::log_errors, routes};

// 创建主路由，所有接口挂载在 api_base_uri 之下
pub fn create_router(state: AppState) -> Router {
    let api = Router::new().nest("/user", routes::user::router());

    let base = state.config.api_base_uri.trim_matches('/');
    let router = if base.is_empty() {
        api
    } else {
        Router::new().nest(&format!("/{base}"), api)
    };

    let router = router.layer(axum::middleware::from_fn(log_errors));

    // 开发模式下允许跨域
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
