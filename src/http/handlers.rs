//! Request handlers for the fixture routes.
//!
//! # Responsibilities
//! - Dispatch by path prefix: `/reverse`, `/delayed`, echo catch-all
//! - Apply the path-exactness rule (404 for non-exact subpaths, body kept)
//! - Emit the stdout diagnostic line for `/reverse` requests
//!
//! No branch rejects input: malformed or unreadable bodies degrade to an
//! empty body, and every response carries a body regardless of status.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;

/// Single entry point for every request; selects a branch by path prefix.
pub(crate) async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path();

    if path.starts_with("/reverse") {
        reverse(request).await
    } else if path.starts_with("/delayed") {
        delayed(&state, request).await
    } else {
        echo(request).await
    }
}

/// `/reverse`: respond with the request body reversed.
///
/// Non-exact paths get a 404 status while still carrying the reversed body,
/// so clients can be exercised against body-with-404 responses.
async fn reverse(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let received = read_body(body).await;
    let reversed = reverse_body(&received);

    // Test-visibility line, part of the fixture's observable contract.
    println!(
        "Reverse: received {:?}, responding with {:?}",
        String::from_utf8_lossy(&received),
        String::from_utf8_lossy(&reversed)
    );

    let status = exact_status(parts.uri.path(), "/reverse");
    (status, reversed).into_response()
}

/// `/delayed`: sleep for the configured interval, then respond `Delayed`.
///
/// Exists so callers can test request timeouts and long-poll behavior. The
/// sleep suspends only this handler's task; concurrent requests proceed.
async fn delayed(state: &AppState, request: Request) -> Response {
    tokio::time::sleep(state.config.delay.duration()).await;

    let status = exact_status(request.uri().path(), "/delayed");
    (status, "Delayed").into_response()
}

/// Catch-all: echo the method and the raw request text so callers can
/// inspect exactly what reached the server.
async fn echo(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let received = read_body(body).await;

    (StatusCode::OK, echo_body(&parts, &received)).into_response()
}

/// Buffer the full request body, however large; the fixture never rejects
/// input by size. Only a mid-stream read failure degrades to empty.
async fn read_body(body: Body) -> Bytes {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default()
}

/// 200 for the exact route (trailing slash allowed), 404 otherwise.
fn exact_status(path: &str, route: &str) -> StatusCode {
    if path == route || path.strip_prefix(route) == Some("/") {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Reverse character-wise when the body is valid UTF-8, byte-wise otherwise.
/// Double application always round-trips.
fn reverse_body(body: &[u8]) -> Vec<u8> {
    match std::str::from_utf8(body) {
        Ok(text) => text.chars().rev().collect::<String>().into_bytes(),
        Err(_) => body.iter().rev().copied().collect(),
    }
}

/// Build the echo body: the method, a colon, then the reconstructed request
/// text (request line, header lines, blank separator, body if any) with
/// every line tab-prefixed.
fn echo_body(parts: &Parts, body: &[u8]) -> String {
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let mut lines = vec![format!(
        "{} {} {:?}",
        parts.method, path_and_query, parts.version
    )];
    for (name, value) in &parts.headers {
        lines.push(format!(
            "{}: {}",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    lines.push(String::new());
    if !body.is_empty() {
        lines.push(String::from_utf8_lossy(body).into_owned());
    }

    format!("{}:\n\t{}", parts.method, lines.join("\r\n\t"))
}
