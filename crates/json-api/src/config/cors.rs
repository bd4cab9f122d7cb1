//! CORS Config

use clap::Args;
use salvo::{
    cors::{AllowHeaders, AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, InvalidHeaderValue, ORIGIN},
    },
};

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Storefront origin allowed to call the API
    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3000")]
    pub frontend_url: String,
}

impl CorsConfig {
    /// Build the CORS hoop for the storefront origin.
    ///
    /// # Errors
    ///
    /// Returns an error when the origin is not a valid header value.
    pub fn handler(&self) -> Result<CorsHandler, InvalidHeaderValue> {
        let origin = HeaderValue::from_str(self.frontend_url.trim_end_matches('/'))?;

        Ok(Cors::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods(vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(AllowHeaders::list([
                ORIGIN,
                CONTENT_TYPE,
                ACCEPT,
                AUTHORIZATION,
                HeaderName::from_static("x-customer-id"),
            ]))
            .allow_credentials(true)
            .into_handler())
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn make_service(frontend_url: &str) -> Result<Service, InvalidHeaderValue> {
        let cors = CorsConfig {
            frontend_url: frontend_url.to_string(),
        }
        .handler()?;

        Ok(Service::new(Router::with_path("rooms").get(ok)).hoop(cors))
    }

    #[tokio::test]
    async fn allows_the_storefront_origin() -> TestResult {
        let res = TestClient::get("http://example.com/rooms")
            .add_header(ORIGIN, "http://localhost:3000", true)
            .send(&make_service("http://localhost:3000/")?)
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));

        Ok(())
    }

    #[tokio::test]
    async fn never_echoes_other_origins() -> TestResult {
        let res = TestClient::get("http://example.com/rooms")
            .add_header(ORIGIN, "http://evil.example", true)
            .send(&make_service("http://localhost:3000")?)
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        assert_ne!(allowed.as_deref(), Some("http://evil.example"));
        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));

        Ok(())
    }

    #[tokio::test]
    async fn answers_preflight_for_customer_header() -> TestResult {
        let res = TestClient::options("http://example.com/rooms")
            .add_header(ORIGIN, "http://localhost:3000", true)
            .add_header("access-control-request-method", "POST", true)
            .add_header("access-control-request-headers", "x-customer-id", true)
            .send(&make_service("http://localhost:3000")?)
            .await;

        let allowed_headers = res
            .headers()
            .get("access-control-allow-headers")
            .and_then(|value| value.to_str().ok())
            .map(str::to_lowercase)
            .unwrap_or_default();

        assert!(allowed_headers.contains("x-customer-id"), "{allowed_headers}");

        Ok(())
    }

    #[test]
    fn rejects_unusable_origin() {
        let config = CorsConfig {
            frontend_url: "http://bad\norigin".to_string(),
        };

        assert!(config.handler().is_err());
    }
}
