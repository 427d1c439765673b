//! Prompt Relay
//!
//! A small web service that forwards a text prompt to the Gemini
//! `generateContent` API and shows the generated text in a browser console.
//!
//! # Modules
//! - `controller`: HTTP handlers for the relay endpoint and the console page
//! - `entities`: local request/response shapes and upstream wire types
//! - `error`: startup and rendering errors
//! - `locales`: user-visible strings loaded from YAML
//! - `middleware`: access logging and JSON error normalization
//! - `routes`: route registration
//! - `service`: relay logic, the upstream client and the console renderer
//! - `utils`: configuration loading and logging bootstrap
//!
//! # Examples
//! ```no_run
//! use actix_web::{web, App, HttpServer};
//! use prompt_relay::routes;
//! use prompt_relay::service::{ConsolePage, RelayService};
//! use prompt_relay::utils::config::{UpstreamConfig, DEFAULT_PAYLOAD_LIMIT};
//! use prompt_relay::Locales;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let locales = Locales::load("locales", "en").expect("locales");
//!     let page = web::Data::new(ConsolePage::new(&locales).expect("template"));
//!     let relay = RelayService::from_config(&UpstreamConfig::default()).expect("client");
//!     let relay = web::Data::new(relay);
//!
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(page.clone())
//!             .app_data(relay.clone())
//!             .configure(routes::configure(DEFAULT_PAYLOAD_LIMIT))
//!     })
//!     .bind("127.0.0.1:3000")?
//!     .run()
//!     .await
//! }
//! ```

pub mod controller;
pub mod entities;
pub mod error;
pub mod locales;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod utils;

pub use error::*;
pub use locales::Locales;
