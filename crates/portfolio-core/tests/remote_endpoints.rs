//! Remote endpoint tests
//!
//! Runs the document store client and the form relay against a throwaway
//! HTTP server on localhost, covering the success path and each degraded path.

use std::net::SocketAddr;

use portfolio_core::site::local_certificates;
use portfolio_core::{
    load_portfolio, ContactForm, FirestoreSource, FormRelay, ProjectCache, ProjectSource,
    SiteConfig, SubmissionOutcome,
};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

// ============================================================================
// Test Utilities
// ============================================================================

/// Serve one canned response per entry of `responses`, in order, and forward
/// each raw request to the returned channel.
async fn serve(responses: Vec<(u16, String)>) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let _ = tx.send(request);

            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });

    (addr, rx)
}

/// Read headers plus a `Content-Length` body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
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
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn config_for(addr: SocketAddr) -> SiteConfig {
    SiteConfig {
        store_url: format!("http://{}", addr),
        relay_url: format!("http://{}", addr),
        project_id: "demo".to_string(),
        contact_email: "owner@example.com".to_string(),
        site_origin: "https://owner.example".to_string(),
        request_timeout_secs: 5,
        ..SiteConfig::default()
    }
}

/// A local address with nothing listening on it.
async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn document(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "name": format!("projects/demo/databases/(default)/documents/projects/{}", id),
        "fields": { "Title": { "stringValue": title } }
    })
}

// ============================================================================
// Document store
// ============================================================================

#[tokio::test]
async fn fetches_projects_across_pages() {
    let first = serde_json::json!({
        "documents": [document("a", "Alpha")],
        "nextPageToken": "tok+/="
    });
    let second = serde_json::json!({ "documents": [document("b", "Beta")] });
    let (addr, mut requests) = serve(vec![(200, first.to_string()), (200, second.to_string())]).await;

    let source = FirestoreSource::new(&config_for(addr)).unwrap();
    let projects = source.fetch_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].title, "Beta");

    let first_req = requests.recv().await.unwrap();
    assert!(first_req.starts_with(
        "GET /v1/projects/demo/databases/(default)/documents/projects?pageSize=100 "
    ));
    let second_req = requests.recv().await.unwrap();
    assert!(second_req.contains("pageToken=tok%2B%2F%3D"));
}

#[tokio::test]
async fn server_error_degrades_and_keeps_certificates() {
    let (addr, _requests) = serve(vec![(503, "{\"error\":\"down\"}".to_string())]).await;
    let dir = TempDir::new().unwrap();
    let cache = ProjectCache::new(dir.path());

    let source = FirestoreSource::new(&config_for(addr)).unwrap();
    let loaded = load_portfolio(&source, Some(&cache), &local_certificates()).await;

    assert!(loaded.is_degraded());
    assert!(loaded.reason().unwrap().contains("503"));
    assert!(loaded.data().projects.is_empty());
    assert_eq!(loaded.data().certificates.len(), 5);
    assert_eq!(cache.load_certificates().unwrap().len(), 5);
}

#[tokio::test]
async fn unreachable_store_degrades() {
    let source = FirestoreSource::new(&config_for(dead_addr().await)).unwrap();
    let loaded = load_portfolio(&source, None, &local_certificates()).await;

    assert!(loaded.is_degraded());
    assert_eq!(loaded.data().certificates, local_certificates());
}

// ============================================================================
// Form relay
// ============================================================================

#[tokio::test]
async fn relay_receives_form_fields() {
    let (addr, mut requests) = serve(vec![(200, "<html>thanks</html>".to_string())]).await;
    let relay = FormRelay::new(&config_for(addr)).unwrap();

    let form = ContactForm::new("Ada Lovelace", "ada@example.com", "Hi & bye");
    let outcome = relay.submit(&form).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Delivered {
            status: 200,
            accepted: true
        }
    );

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("POST /owner@example.com "));
    assert!(request.contains("_captcha=false"));
    assert!(request.contains("_template=table"));
    assert!(request.contains("name=Ada+Lovelace"));
    assert!(request.contains("message=Hi+%26+bye"));
    assert!(request.contains("_next=https%3A%2F%2Fowner.example%2F"));
}

#[tokio::test]
async fn relay_error_status_is_still_delivered() {
    let (addr, _requests) = serve(vec![(500, "oops".to_string())]).await;
    let relay = FormRelay::new(&config_for(addr)).unwrap();

    let outcome = relay
        .submit(&ContactForm::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Delivered {
            status: 500,
            accepted: false
        }
    );
    assert!(outcome.shows_success());
}

#[tokio::test]
async fn relay_redirect_counts_as_accepted() {
    let (addr, _requests) = serve(vec![(302, String::new())]).await;
    let relay = FormRelay::new(&config_for(addr)).unwrap();

    let outcome = relay
        .submit(&ContactForm::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    assert!(outcome.is_confirmed());
}

#[tokio::test]
async fn unreachable_relay_is_assumed_delivered() {
    let relay = FormRelay::new(&config_for(dead_addr().await)).unwrap();

    let outcome = relay
        .submit(&ContactForm::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    assert!(matches!(outcome, SubmissionOutcome::AssumedDelivered { .. }));
    assert!(outcome.shows_success());
}
