mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "cantiere={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let mut engine = engine::Engine::new();
    if let Some(path) = &settings.server.seed_fixture {
        let raw = std::fs::read_to_string(path)?;
        engine.load_fixture(&raw)?;
        tracing::info!("Seeded engine from {path}");
    }

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(engine, listener).await?;
    Ok(())
}
