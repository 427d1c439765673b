use crate::error::AppError;
use crate::service::console::{ConsolePage, ConsoleView};
use crate::service::generation::RelayService;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{get, post, web, HttpResponse, ResponseError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConsoleForm {
    #[serde(default)]
    pub prompt: String,
}

#[get("/")]
pub async fn show_console(page: web::Data<ConsolePage>) -> Result<HttpResponse, AppError> {
    render(&page, StatusCode::OK, &ConsoleView::default())
}

/// Form fallback of the console: same validation and relay as the JSON
/// endpoint, answered with the re-rendered page.
#[post("/")]
pub async fn submit_console(
    page: web::Data<ConsolePage>,
    relay: web::Data<RelayService>,
    form: web::Form<ConsoleForm>,
) -> Result<HttpResponse, AppError> {
    let prompt = form.into_inner().prompt;

    if prompt.trim().is_empty() {
        let view = ConsoleView::with_error(prompt, page.labels().empty_prompt.clone());
        return render(&page, StatusCode::BAD_REQUEST, &view);
    }

    match relay.generate(Some(&prompt)).await {
        Ok(output) => render(&page, StatusCode::OK, &ConsoleView::with_output(prompt, output)),
        Err(e) => {
            let view = ConsoleView::with_error(prompt, e.public_message());
            render(&page, e.status_code(), &view)
        }
    }
}

fn render(
    page: &ConsolePage,
    status: StatusCode,
    view: &ConsoleView,
) -> Result<HttpResponse, AppError> {
    let html = page.render(view)?;
    Ok(HttpResponse::build(status).content_type(ContentType::html()).body(html))
}
