//! Fluxo completo do componente contra um Active Collab simulado (httpmock)

use activecollab_component::errors::{INVALID_PROPERTIES, NOT_FOUND};
use activecollab_component::utils::logging::init_tracing;
use activecollab_component::{
    error_message, ActiveCollab, ActiveCollabSettings, ComponentError, Params, RequestErrors,
    RequestType, ERROR_TOKEN_UNDEFINED,
};
use httpmock::prelude::*;
use serde_json::json;

fn settings(server: &MockServer) -> ActiveCollabSettings {
    ActiveCollabSettings::new("ACME", "Middleware", "bot@acme.com", "secret", server.base_url())
}

fn params(value: serde_json::Value) -> Params {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn test_token_and_client_are_reused_across_requests() {
    init_tracing();
    let server = MockServer::start_async().await;

    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/issue-token");
            then.status(200).json_body(json!({"is_ok": true, "token": "1-abc"}));
        })
        .await;
    let projects_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v5/projects")
                .header("X-Angie-AuthApiToken", "1-abc");
            then.status(200).json_body(json!([{"id": 1, "name": "Site"}]));
        })
        .await;

    let mut ac = ActiveCollab::new(settings(&server));

    let first = ac.request("projects", &Params::new(), "get").await.unwrap();
    let second = ac.get("projects", &Params::new()).await;

    assert_eq!(first, json!([{"id": 1, "name": "Site"}]));
    assert_eq!(second, first);
    assert!(ac.request_errors().is_empty());
    token_mock.assert_hits_async(1).await;
    projects_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_rejected_credentials_record_token_undefined() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/issue-token");
            then.status(200).json_body(json!({"is_ok": false, "message": "Invalid password"}));
        })
        .await;

    let mut ac = ActiveCollab::new(settings(&server));
    let data = ac.get("projects", &Params::new()).await;

    assert_eq!(data, json!({}));
    let expected = RequestErrors::from([(
        ERROR_TOKEN_UNDEFINED,
        error_message(ERROR_TOKEN_UNDEFINED).to_string(),
    )]);
    assert_eq!(ac.request_errors(), &expected);
}

#[tokio::test]
async fn test_not_found_and_invalid_properties() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/issue-token");
            then.status(200).json_body(json!({"is_ok": true, "token": "1-abc"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v5/projects/404");
            then.status(404).json_body(json!({"message": "Not found"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v5/projects")
                .json_body(json!({"name": ""}));
            then.status(200).json_body(json!({"code": 0, "message": "Name is required"}));
        })
        .await;

    let mut ac = ActiveCollab::new(settings(&server));

    let deleted = ac
        .send("projects/404", &Params::new(), RequestType::Delete)
        .await;
    assert_eq!(deleted, json!({}));
    let expected = RequestErrors::from([(NOT_FOUND, error_message(NOT_FOUND).to_string())]);
    assert_eq!(ac.request_errors(), &expected);

    let created = ac
        .request("projects", &params(json!({"name": ""})), "POST")
        .await
        .unwrap();
    assert_eq!(created, json!({}));
    let expected = RequestErrors::from([(
        INVALID_PROPERTIES,
        error_message(INVALID_PROPERTIES).to_string(),
    )]);
    assert_eq!(ac.request_errors(), &expected);
}

#[tokio::test]
async fn test_invalid_verb_never_reaches_server() {
    let server = MockServer::start_async().await;

    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/issue-token");
            then.status(200).json_body(json!({"is_ok": true, "token": "1-abc"}));
        })
        .await;

    let mut ac = ActiveCollab::new(settings(&server));
    let err = ac
        .request("projects", &Params::new(), "connect")
        .await
        .unwrap_err();

    assert!(matches!(err, ComponentError::InvalidRequestType(ref verb) if verb == "connect"));
    assert!(ac.request_errors().is_empty());
    token_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_unreachable_instance_records_token_undefined() {
    let mut settings = ActiveCollabSettings::new("ACME", "Middleware", "bot@acme.com", "secret", "http://127.0.0.1:9");
    settings.connect_timeout_secs = 1;
    settings.timeout_secs = 2;

    let mut ac = ActiveCollab::new(settings);
    let data = ac.get("projects", &Params::new()).await;

    assert_eq!(data, json!({}));
    assert_eq!(ac.request_errors().keys().copied().collect::<Vec<_>>(), vec![ERROR_TOKEN_UNDEFINED]);
}

#[tokio::test]
async fn test_truncated_response_body_is_recorded_as_unavailable() {
    use activecollab_component::errors::UNAVAILABLE;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    // issue-token responde normal; a chamada seguinte anuncia 500 bytes e fecha após 6
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let request = read_request(&mut socket).await;
            let reply: &[u8] = if request.contains("issue-token") {
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: 33\r\n\r\n{\"is_ok\": true, \"token\": \"1-abc\"}"
            } else {
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: 500\r\n\r\n{\"id\":"
            };
            let _ = socket.write_all(reply).await;
            let _ = socket.shutdown().await;
        }
    });

    let settings = ActiveCollabSettings::new("ACME", "Middleware", "bot@acme.com", "secret", format!("http://{}", addr));
    let mut ac = ActiveCollab::new(settings);
    let data = ac.get("projects", &Params::new()).await;

    assert_eq!(data, json!({}));
    let expected = RequestErrors::from([(UNAVAILABLE, error_message(UNAVAILABLE).to_string())]);
    assert_eq!(ac.request_errors(), &expected);
}

/// Lê cabeçalhos e corpo (Content-Length) de uma requisição HTTP/1.1
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    use tokio::io::AsyncReadExt;

    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&data).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                return text;
            }
        }
    }
    String::from_utf8_lossy(&data).to_string()
}
