use anyhow::{anyhow, bail, Context, Result};
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use crate::collection_schema::CollectionConfig;

pub const LOCAL_URL: &str = "http://localhost:8080";

/// Connection to a Weaviate instance over its REST API.
///
/// Pooled HTTP connections are released when the handle is dropped, so a
/// `Weaviate` held in a scope is closed on every exit path, `?` included.
pub struct Weaviate {
    http: Client,
    base_url: Url,
}

impl Weaviate {
    pub async fn connect_to_local() -> Result<Self> {
        Self::connect(LOCAL_URL).await
    }

    /// Connects to `url`. The instance must already report ready, otherwise
    /// the handle is dropped and an error returned.
    pub async fn connect(url: &str) -> Result<Self> {
        let base_url = Url::parse(url).with_context(|| format!("invalid Weaviate URL '{}'", url))?;
        let http = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        let weaviate = Weaviate { http, base_url };
        weaviate.ready().await?;
        debug!("connected to Weaviate at {}", weaviate.base_url);
        Ok(weaviate)
    }

    async fn ready(&self) -> Result<()> {
        let url = self.endpoint(&[".well-known", "ready"])?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("could not connect to Weaviate at {}", self.base_url))?;
        if !response.status().is_success() {
            bail!(
                "Weaviate at {} is not ready (HTTP {})",
                self.base_url,
                response.status()
            );
        }
        Ok(())
    }

    /// Fetches a class definition; `None` when the class does not exist.
    pub async fn get_class(&self, class: &str) -> Result<Option<serde_json::Value>> {
        let url = self.endpoint(&["schema", class])?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to look up collection '{}'", class))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response, "look up collection", class).await?;
        // Some Weaviate versions answer 200 with an empty body for a missing class.
        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }
        let class_definition = serde_json::from_str(&body)
            .with_context(|| format!("invalid schema response for collection '{}'", class))?;
        Ok(Some(class_definition))
    }

    pub async fn delete_class(&self, class: &str) -> Result<()> {
        let url = self.endpoint(&["schema", class])?;
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .with_context(|| format!("failed to delete collection '{}'", class))?;
        check_status(response, "delete collection", class).await?;
        Ok(())
    }

    pub async fn create_class(&self, config: &CollectionConfig) -> Result<()> {
        let url = self.endpoint(&["schema"])?;
        let response = self
            .http
            .post(url)
            .json(config)
            .send()
            .await
            .with_context(|| format!("failed to create collection '{}'", config.name))?;
        check_status(response, "create collection", &config.name).await?;
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Weaviate URL '{}' cannot be a base", self.base_url))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }
}

impl Drop for Weaviate {
    fn drop(&mut self) {
        debug!("closing connection to Weaviate at {}", self.base_url);
    }
}

async fn check_status(response: Response, action: &str, class: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    bail!("failed to {} '{}': HTTP {}: {}", action, class, status, body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn ready_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/.well-known/ready"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_connect_checks_readiness() {
        let server = ready_server().await;
        let weaviate = Weaviate::connect(&server.uri()).await;
        assert!(weaviate.is_ok());
    }

    #[tokio::test]
    async fn test_connect_fails_when_not_ready() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/.well-known/ready"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = Weaviate::connect(&server.uri()).await.err().unwrap();
        assert!(err.to_string().contains("not ready"));
    }

    #[tokio::test]
    async fn test_connect_fails_without_server() {
        let result = Weaviate::connect("http://127.0.0.1:9").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_class_missing_returns_none() {
        let server = ready_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/schema/Articles"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let weaviate = Weaviate::connect(&server.uri()).await.unwrap();
        assert!(weaviate.get_class("Articles").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_class_empty_body_returns_none() {
        let server = ready_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/schema/Articles"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let weaviate = Weaviate::connect(&server.uri()).await.unwrap();
        assert!(weaviate.get_class("Articles").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_class_server_error_is_reported() {
        let server = ready_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/schema/Articles"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let weaviate = Weaviate::connect(&server.uri()).await.unwrap();
        let err = weaviate.get_class("Articles").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let weaviate = Weaviate {
            http: Client::new(),
            base_url: Url::parse("http://localhost:8080/").unwrap(),
        };
        let url = weaviate.endpoint(&["schema", "Articles"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/schema/Articles");
    }
}
