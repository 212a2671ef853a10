//! HTTP creation client — talks to the real service over reqwest.

use async_trait::async_trait;

use crate::config::WizardConfig;
use crate::error::SubmitError;
use crate::pipeline::payload::SubmissionPayload;
use crate::remote::{CreationClient, InterviewCreated, RemoteErrorBody};

/// Fallback message when a failure response carries no parseable body.
const GENERIC_REMOTE_ERROR: &str =
    "Failed to create interview. Please check the connection or try again.";

/// Creation client backed by an HTTP service.
pub struct HttpCreationClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCreationClient {
    /// Build a client from config. The request timeout is applied at the
    /// client level so every creation call shares the configured bound.
    pub fn new(config: &WizardConfig) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SubmitError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.service_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/create-interview", self.base_url)
    }
}

#[async_trait]
impl CreationClient for HttpCreationClient {
    async fn create_interview(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<InterviewCreated, SubmitError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the service's structured error; fall back to a
            // generic message rather than an empty banner.
            let message = match response.json::<RemoteErrorBody>().await {
                Ok(body) if !body.error.is_empty() => body.error,
                _ => GENERIC_REMOTE_ERROR.to_string(),
            };
            tracing::warn!(status = %status, message = %message, "Creation request rejected");
            return Err(SubmitError::Remote { message });
        }

        response
            .json::<InterviewCreated>()
            .await
            .map_err(|e| SubmitError::Transport {
                message: format!("invalid creation response: {e}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;
    use crate::draft::SessionDraft;

    /// Serve exactly one canned HTTP response on an ephemeral port and
    /// return the base URL to point the client at.
    async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> HttpCreationClient {
        let config = WizardConfig {
            service_url: base_url,
            ..Default::default()
        };
        HttpCreationClient::new(&config).unwrap()
    }

    fn valid_payload() -> SubmissionPayload {
        let mut draft = SessionDraft::new();
        draft.set_email("e@x.com");
        draft.set_question(0, "Q1");
        draft.set_trait(0, "T1");
        draft.set_recipient(0, "r@x.com");
        SubmissionPayload::from_draft(&draft).unwrap()
    }

    #[tokio::test]
    async fn failure_body_error_field_surfaces_exactly() {
        let base = serve_once("HTTP/1.1 400 Bad Request", r#"{"error": "bad request"}"#).await;
        let client = client_for(base);

        let result = client.create_interview(&valid_payload()).await;
        match result {
            Err(SubmitError::Remote { message }) => assert_eq!(message, "bad request"),
            other => panic!("expected Remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_failure_body_gets_generic_fallback() {
        let base = serve_once("HTTP/1.1 500 Internal Server Error", "<html>oops</html>").await;
        let client = client_for(base);

        let result = client.create_interview(&valid_payload()).await;
        match result {
            Err(SubmitError::Remote { message }) => {
                assert!(!message.is_empty());
                assert_eq!(message, GENERIC_REMOTE_ERROR);
            }
            other => panic!("expected Remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_error_field_also_falls_back() {
        let base = serve_once("HTTP/1.1 400 Bad Request", r#"{"error": ""}"#).await;
        let client = client_for(base);

        let result = client.create_interview(&valid_payload()).await;
        match result {
            Err(SubmitError::Remote { message }) => assert_eq!(message, GENERIC_REMOTE_ERROR),
            other => panic!("expected Remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_response_parses_links() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"interview_link": "http://h/interview/abc123", "report_link": "http://h/report/abc123"}"#,
        )
        .await;
        let client = client_for(base);

        let created = client.create_interview(&valid_payload()).await.unwrap();
        assert_eq!(created.interview_link, "http://h/interview/abc123");
        assert_eq!(created.report_link, "http://h/report/abc123");
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind then drop, so the port is very likely unoccupied.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"));
        let result = client.create_interview(&valid_payload()).await;
        match result {
            Err(SubmitError::Transport { message }) => assert!(!message.is_empty()),
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = WizardConfig {
            service_url: "http://127.0.0.1:5000".into(),
            ..Default::default()
        };
        let client = HttpCreationClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/create-interview");
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let config = WizardConfig {
            service_url: "http://host/".into(),
            ..Default::default()
        };
        let client = HttpCreationClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://host/create-interview");
    }
}
