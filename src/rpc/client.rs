//! HTTP client for the remote calldata decoding service.

use super::types::{DecodeRequest, DecodedCall};
use crate::decoder::CalldataDecoder;
use crate::utils::config::DEFAULT_DECODE_TIMEOUT;
use crate::utils::error::DecodeError;
use log::debug;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Client for a Swiss-Knife style `decoder-recursive` endpoint
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DecoderClient {
    client: Client,
    endpoint: String,
}

impl DecoderClient {
    /// Create a client for the given endpoint with the default timeout
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DecodeError> {
        Self::with_timeout(endpoint, DEFAULT_DECODE_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DecodeError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DecodeError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST calldata and parse the decoded call
    pub async fn decode_calldata(&self, calldata: &str) -> Result<DecodedCall, DecodeError> {
        debug!("Decoding calldata via {}: {}", self.endpoint, calldata);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&DecodeRequest { calldata })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DecodeError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| DecodeError::InvalidResponse(format!("{}: {}", e, body)))
    }
}

impl CalldataDecoder for DecoderClient {
    fn decode(
        &self,
        calldata: &str,
    ) -> impl Future<Output = Result<DecodedCall, DecodeError>> + Send {
        self.decode_calldata(calldata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::types::RawArg;
    use crate::utils::config::DEFAULT_DECODER_URL;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one HTTP response on a local port, returning the endpoint URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Drain the request so the client sees a clean exchange
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/decode", addr)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let client = DecoderClient::new("http://localhost:3000/decode").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/decode");
    }

    #[test]
    fn test_default_endpoint_is_https() {
        let client = DecoderClient::new(DEFAULT_DECODER_URL).unwrap();
        assert!(client.endpoint().starts_with("https://"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        // Port 9 (discard) is not listening on test machines
        let client =
            DecoderClient::with_timeout("http://127.0.0.1:9/decode", Duration::from_secs(2))
                .unwrap();
        let result = client.decode_calldata("0x12345678").await;
        assert!(matches!(result, Err(DecodeError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let endpoint = serve_once("503 Service Unavailable", "busy").await;
        let client = DecoderClient::new(endpoint).unwrap();

        let result = client.decode_calldata("0x12345678").await;
        match result {
            Err(DecodeError::HttpStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let endpoint = serve_once("200 OK", "{}").await;
        let client = DecoderClient::new(endpoint).unwrap();

        let result = client.decode_calldata("0x12345678").await;
        assert!(matches!(result, Err(DecodeError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_decodes_nested_raw_args() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"functionName":"swap","rawArgs":["0x01",["1000000","abc"]]}"#,
        )
        .await;
        let client = DecoderClient::new(endpoint).unwrap();

        let call = client.decode("0x12345678").await.unwrap();
        assert_eq!(call.function_name, "swap");
        assert_eq!(
            call.raw_args,
            vec![
                RawArg::Scalar("0x01".to_string()),
                RawArg::List(vec![
                    RawArg::Scalar("1000000".to_string()),
                    RawArg::Scalar("abc".to_string()),
                ]),
            ]
        );
    }
}
