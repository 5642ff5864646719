//! Page document routes
//!
//! Six fixed routes plus a wildcard fallback. Each returns a structured page
//! document composed from the static brand/catalog records; the fallback
//! returns the not-found page with a link back home.
//!
//! # 路由列表
//!
//! | 路径 | 说明 |
//! |------|------|
//! | / | 首页 |
//! | /menu | 菜单 |
//! | /reservations | 预订表单 |
//! | /gallery | 图库 |
//! | /about | 关于 |
//! | /contact | 联系 |
//! | (其他) | 404 回退 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/menu", get(handler::menu))
        .route("/reservations", get(handler::reservations))
        .route("/gallery", get(handler::gallery))
        .route("/about", get(handler::about))
        .route("/contact", get(handler::contact))
        .fallback(handler::not_found)
}
