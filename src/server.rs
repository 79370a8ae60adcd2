use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, error};

pub async fn start_control_server() {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/move", post(api::move_route))
        .route("/add", post(api::add_route))
        .route("/del", post(api::del_route));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
