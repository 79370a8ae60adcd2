use crate::{config, info, server};

/// Runs the HTTP control server until the process is killed.
pub async fn serve() {
    info!("Control server listening on {}", config::server_addr());
    server::start_control_server().await;
}
