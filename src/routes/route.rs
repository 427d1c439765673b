use crate::controller::{console, generate};
use actix_web::web;

/// Registers the relay endpoint under `/api` and the console at `/`.
///
/// The relay and page services themselves are expected as app data
/// (`web::Data<RelayService>`, `web::Data<ConsolePage>`).
pub fn configure(payload_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(generate::json_config(payload_limit))
            .app_data(web::FormConfig::default().limit(payload_limit))
            .service(generate::routes())
            .service(console::show_console)
            .service(console::submit_console);
    }
}
