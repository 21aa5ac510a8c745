use std::process::ExitCode;
use std::sync::Arc;

use mongodb::{Client, bson::doc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_api::{AppState, config::Config, database::MongoUserService, router::create_router};

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    // 连接 MongoDB 并确认可用
    let client = match Client::with_uri_str(&config.database_url).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let db = client.database(&config.database_name);
    if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
        tracing::error!("MongoDB ping failed: {}", e);
        return ExitCode::FAILURE;
    }
    tracing::info!("mongo connection established");

    // 设置应用状态
    let state = AppState {
        users: Arc::new(MongoUserService::from_database(
            &db,
            &config.user_collection,
        )),
        config: config.clone(),
    };
    let app = create_router(state);

    // 启动服务器
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // 释放数据库连接
    client.shutdown().await;
    tracing::info!("mongo connection closed");

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
