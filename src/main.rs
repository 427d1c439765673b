use actix_web::{web, App, HttpServer};
use anyhow::Context;

use prompt_relay::middleware::{error_handler, Logging};
use prompt_relay::routes;
use prompt_relay::service::{ConsolePage, RelayService};
use prompt_relay::utils::init;
use prompt_relay::{AppError, Locales};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化应用配置和日志系统
    let config = init::init()
        .await
        .context("Failed to initialize application")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // 初始化本地化系统
    let locales =
        Locales::load(&config.locales.path, &config.locales.default).map_err(AppError::from)?;
    let console_page = web::Data::new(ConsolePage::new(&locales).map_err(AppError::from)?);
    let relay =
        web::Data::new(RelayService::from_config(&config.upstream).map_err(AppError::from)?);

    let host = config.server.host.clone();
    let port = config.server.port;
    let shutdown_timeout = config.server.shutdown_timeout;
    let payload_limit = config.server.payload_limit;

    log::info!("Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(console_page.clone())
            .app_data(relay.clone())
            .wrap(error_handler())
            .wrap(Logging)
            .configure(routes::configure(payload_limit))
    })
    .client_request_timeout(std::time::Duration::from_secs(30)) // 客户端请求超时30秒
    .bind((host, port))?
    .shutdown_timeout(shutdown_timeout) // 优雅关闭等待时间
    .run()
    .await
}
