pub mod depth_chart;
pub mod get;
pub mod list;
pub mod sign;
pub mod stats;

use crate::GameAppData;
use axum::Router;

pub fn team_routes() -> Router<GameAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(get::routes::routes())
        .merge(depth_chart::routes::routes())
        .merge(sign::routes::routes())
        .merge(stats::routes::routes())
}
