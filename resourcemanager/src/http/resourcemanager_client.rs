use std::sync::Arc;
use std::time::Duration;

use reqwest::Response;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use token_source::TokenSource;

use crate::http::error::{Error, ErrorWrapper};

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];

#[derive(Debug, Clone)]
pub struct ResourceManagerClient {
    ts: Arc<dyn TokenSource>,
    endpoint: String,
    http: Client,
    timeout: Option<Duration>,
    debug: bool,
}

impl ResourceManagerClient {
    pub(crate) fn new(
        ts: Arc<dyn TokenSource>,
        endpoint: &str,
        http: Client,
        timeout: Option<Duration>,
        debug: bool,
    ) -> Self {
        Self {
            ts,
            endpoint: format!("{endpoint}/v1"),
            http,
            timeout,
            debug,
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    async fn with_headers(&self, builder: RequestBuilder) -> Result<RequestBuilder, Error> {
        let token = self.ts.token().await.map_err(Error::TokenSource)?;
        let builder = builder
            .header("X-Goog-Api-Client", "rust")
            .header(reqwest::header::USER_AGENT, "google-cloud-resourcemanager")
            .header(reqwest::header::AUTHORIZATION, token);
        Ok(match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        })
    }

    pub async fn send<T>(&self, builder: RequestBuilder) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.with_headers(builder).await?;
        let response = request.send().await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "received response");
        let response = Self::check_response_status(response).await?;
        if self.debug {
            let text = response.text().await?;
            tracing::info!("{}", text);
            Ok(serde_json::from_str(text.as_str())?)
        } else {
            Ok(response.json().await?)
        }
    }

    /// Checks whether an HTTP response is successful and returns it, or returns an error.
    async fn check_response_status(response: Response) -> Result<Response, Error> {
        // Check the status code, returning the response if it is not an error.
        let error = match response.error_for_status_ref() {
            Ok(_) => return Ok(response),
            Err(error) => error,
        };

        // try to extract a response error, falling back to the status error if it can not be parsed.
        Err(response
            .json::<ErrorWrapper>()
            .await
            .map(|wrapper| Error::Response(wrapper.error))
            .unwrap_or(Error::HttpClient(error)))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use token_source::TokenSource;

    use crate::http::error::Error;
    use crate::http::resourcemanager_client::ResourceManagerClient;
    use crate::http::types::Policy;

    #[derive(Debug)]
    pub struct StaticTokenSource;

    #[async_trait::async_trait]
    impl TokenSource for StaticTokenSource {
        async fn token(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok("Bearer test-token".to_string())
        }
    }

    #[derive(Debug)]
    struct FailingTokenSource;

    #[async_trait::async_trait]
    impl TokenSource for FailingTokenSource {
        async fn token(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Err("no credentials".into())
        }
    }

    /// Serves a single canned HTTP response and yields the raw request that was received.
    pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let (endpoint, handle) = serve(vec![(status, body)]).await;
        let handle = tokio::spawn(async move { handle.await.unwrap().remove(0) });
        (endpoint, handle)
    }

    /// Serves the canned HTTP responses in order, one per connection, and yields the raw requests.
    pub async fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let mut requests = Vec::with_capacity(responses.len());
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut received = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    received.extend_from_slice(&buf[..n]);
                    if request_complete(&received) {
                        break;
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
                requests.push(String::from_utf8(received).unwrap());
            }
            requests
        });
        (endpoint, handle)
    }

    fn request_complete(received: &[u8]) -> bool {
        let text = String::from_utf8_lossy(received);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        received.len() >= header_end + 4 + content_length
    }

    pub fn local_client(endpoint: &str) -> ResourceManagerClient {
        ResourceManagerClient::new(
            Arc::new(StaticTokenSource),
            endpoint,
            reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build(),
            Some(Duration::from_secs(10)),
            true,
        )
    }

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("google_cloud_resourcemanager=trace".parse().unwrap());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    #[tokio::test]
    async fn test_send_adds_headers() {
        let (endpoint, server) = serve_once("200 OK", r#"{"version": 1, "etag": "BwWWja0YfJA="}"#).await;
        let client = local_client(&endpoint);
        let builder = client.http().get(format!("{}/projects/p1", client.endpoint()));
        let policy: Policy = client.send(builder).await.unwrap();
        assert_eq!(policy.version, 1);
        assert_eq!(policy.etag.as_deref(), Some("BwWWja0YfJA="));

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /v1/projects/p1 http/1.1"), "{request}");
        assert!(request.contains("authorization: bearer test-token"), "{request}");
        assert!(request.contains("x-goog-api-client: rust"), "{request}");
        assert!(request.contains("user-agent: google-cloud-resourcemanager"), "{request}");
    }

    #[tokio::test]
    async fn test_send_maps_error_response() {
        let (endpoint, server) = serve_once(
            "403 Forbidden",
            r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#,
        )
        .await;
        let client = local_client(&endpoint);
        let builder = client.http().get(format!("{}/projects/p1", client.endpoint()));
        let err = client.send::<Policy>(builder).await.unwrap_err();
        server.await.unwrap();
        match err {
            Error::Response(res) => {
                assert_eq!(res.code, 403);
                assert_eq!(res.status.as_deref(), Some("PERMISSION_DENIED"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_falls_back_to_status_error() {
        let (endpoint, server) = serve_once("502 Bad Gateway", "upstream unavailable").await;
        let client = local_client(&endpoint);
        let builder = client.http().get(format!("{}/projects/p1", client.endpoint()));
        let err = client.send::<Policy>(builder).await.unwrap_err();
        server.await.unwrap();
        match err {
            Error::HttpClient(e) => assert_eq!(e.status(), Some(reqwest::StatusCode::BAD_GATEWAY)),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            // hold the connection open without ever answering
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });
        let client = ResourceManagerClient::new(
            Arc::new(StaticTokenSource),
            &endpoint,
            reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build(),
            Some(Duration::from_millis(200)),
            false,
        );
        let builder = client.http().get(format!("{}/projects/p1", client.endpoint()));
        let err = client.send::<Policy>(builder).await.unwrap_err();
        server.abort();
        assert!(matches!(&err, Error::HttpClient(e) if e.is_timeout()), "{err:?}");
    }

    #[tokio::test]
    async fn test_send_malformed_body() {
        let (endpoint, server) = serve_once("200 OK", "<html>not json</html>").await;
        let client = local_client(&endpoint);
        let builder = client.http().get(format!("{}/projects/p1", client.endpoint()));
        let err = client.send::<Policy>(builder).await.unwrap_err();
        server.await.unwrap();
        assert!(matches!(err, Error::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_token_source_failure() {
        let client = ResourceManagerClient::new(
            Arc::new(FailingTokenSource),
            "http://127.0.0.1:9",
            reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build(),
            None,
            false,
        );
        let builder = client.http().get(format!("{}/projects/p1", client.endpoint()));
        let err = client.send::<Policy>(builder).await.unwrap_err();
        assert!(matches!(err, Error::TokenSource(_)), "{err:?}");
    }
}
