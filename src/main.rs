use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_assistant_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        log::error!("CRITICAL ERROR: {}", e);
        std::process::exit(1);
    }

    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;
    let bind = (config.web_server_host.clone(), config.web_server_port);

    log::info!(
        "Server is running on http://{}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await
}
