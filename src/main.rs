use actix_web::{App, HttpServer, middleware::Logger};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write;

use freskin_backend::{
    AppServices,
    config::Config,
    database::{create_pool, run_migrations},
    middlewares::{AuthMiddleware, create_cors},
    services::WeatherSource,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        std::io::Error::other(e.to_string())
    })?;

    let pool = create_pool(&config.database).await.map_err(|e| {
        log::error!("Failed to connect to the database: {e}");
        std::io::Error::other(e.to_string())
    })?;

    run_migrations(&pool).await.map_err(|e| {
        log::error!("Failed to run database migrations: {e}");
        std::io::Error::other(e.to_string())
    })?;

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.expires_in);

    let weather_source = WeatherSource::from_config(&config.weather)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    if matches!(weather_source, WeatherSource::Simulated) {
        log::info!("No weather API key configured, using simulated readings");
    }

    let services = AppServices::new(
        pool,
        jwt_service.clone(),
        weather_source,
        config.weather.default_city.clone(),
    );

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .wrap(create_cors())
            .wrap(Logger::default())
            .configure(swagger_config)
            .configure(|cfg| services.configure(cfg))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
