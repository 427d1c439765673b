use crate::entities::ErrorBody;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, StatusCode},
    Error as ActixError, HttpResponse,
};
use std::{future::Future, pin::Pin};

/// Gives framework-level failures the same `{ "error": ... }` shape the
/// relay uses.
///
/// Error responses that already carry JSON or HTML pass through untouched;
/// anything else (unknown route, wrong method, plain-text error bodies) is
/// replaced with the status's canonical reason.
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // routing needs sole ownership of the request, so only copies of its head are kept
        let method = req.method().clone();
        let uri = req.uri().clone();

        log::debug!("Handling request: method={}, uri={}", method, uri);

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let status = res.status();
                    if !(status.is_client_error() || status.is_server_error()) || is_rendered(&res)
                    {
                        return Ok(res.map_into_boxed_body());
                    }

                    if let Some(err) = res.response().error() {
                        log::debug!("Error details: {:?}", err);
                    }
                    let (req, _) = res.into_parts();
                    Ok(ServiceResponse::new(req, error_response(status)))
                }
                Err(err) => {
                    log::error!("Request failed: {} {}", method, uri);
                    log::debug!("Error details: {:?}", err);
                    Err(err)
                }
            }
        })
    }
}

/// Whether the handler already produced a body meant for the caller.
fn is_rendered<B>(res: &ServiceResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| {
            value.starts_with("application/json") || value.starts_with("text/html")
        })
}

fn error_response(status: StatusCode) -> HttpResponse {
    let message = status.canonical_reason().unwrap_or("Unknown error");
    HttpResponse::build(status).json(ErrorBody::new(message))
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}
