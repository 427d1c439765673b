use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;

/// 用于请求计时和日志记录的中间件
///
/// Emits one access line per request: method, path, status and latency.
///
/// # 示例
/// ```
/// use actix_web::App;
/// use prompt_relay::middleware::Logging;
///
/// App::new()
///     .wrap(Logging);
/// ```
pub struct Logging;

impl<S, B> Transform<S, ServiceRequest> for Logging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggingMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LoggingMiddleware { service })
    }
}

pub struct LoggingMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for LoggingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = std::time::Instant::now();
        let path = req.path().to_string();
        let method = req.method().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let duration = start.elapsed();
                    let status = res.status();
                    let level =
                        if status.is_server_error() { log::Level::Warn } else { log::Level::Info };
                    log::log!(
                        level,
                        "{} {} {} - {}ms",
                        method,
                        path,
                        status.as_u16(),
                        duration.as_millis()
                    );
                    Ok(res)
                }
                Err(err) => {
                    log::error!(
                        "{} {} failed after {}ms: {}",
                        method,
                        path,
                        start.elapsed().as_millis(),
                        err
                    );
                    Err(err)
                }
            }
        })
    }
}
