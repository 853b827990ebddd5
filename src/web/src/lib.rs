mod common;
mod error;
mod game;
mod player;
mod routes;
mod standings;
mod teams;
mod trade;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use gm_core::{LeagueData, RosterService, TradeService, WeekSimulator};
use log::{error, info};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub struct LeagueServer {
    data: GameAppData,
    port: u16,
}

impl LeagueServer {
    pub fn new(data: GameAppData, port: u16) -> Self {
        LeagueServer { data, port }
    }

    pub fn app(data: GameAppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    }))
                    .layer(CorsLayer::permissive()),
            )
            .with_state(data)
    }

    pub async fn run(&self) -> io::Result<()> {
        let app = Self::app(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://localhost:{}", self.port);

        axum::serve(listener, app).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

pub struct GameAppData {
    pub data: Arc<RwLock<LeagueData>>,
    pub roster: Arc<RosterService>,
    pub trades: Arc<TradeService>,
    pub simulator: Arc<WeekSimulator>,
    pub current_year: u32,
}

impl GameAppData {
    pub fn new(
        data: LeagueData,
        roster: RosterService,
        trades: TradeService,
        simulator: WeekSimulator,
        current_year: u32,
    ) -> Self {
        GameAppData {
            data: Arc::new(RwLock::new(data)),
            roster: Arc::new(roster),
            trades: Arc::new(trades),
            simulator: Arc::new(simulator),
            current_year,
        }
    }
}

impl Clone for GameAppData {
    fn clone(&self) -> Self {
        GameAppData {
            data: Arc::clone(&self.data),
            roster: Arc::clone(&self.roster),
            trades: Arc::clone(&self.trades),
            simulator: Arc::clone(&self.simulator),
            current_year: self.current_year,
        }
    }
}
