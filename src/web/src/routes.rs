use crate::common::common_routes;
use crate::common::default_handler::default_handler;
use crate::game::game_routes;
use crate::player::player_routes;
use crate::standings::standings_routes;
use crate::teams::team_routes;
use crate::trade::trade_routes;
use crate::GameAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        Router::<GameAppData>::new()
            .merge(common_routes())
            .merge(team_routes())
            .merge(player_routes())
            .merge(game_routes())
            .merge(trade_routes())
            .merge(standings_routes())
            .fallback(default_handler)
    }
}
