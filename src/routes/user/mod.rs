use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::AppState;

mod handler;

pub use handler::{create_user, delete_user, get_all, get_user, update_user};

// 用户路由，挂载在 /user 下
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/get/{name}", get(get_user))
        .route("/getall", get(get_all))
        .route("/update", patch(update_user))
        .route("/delete/{name}", delete(delete_user))
}
