//! In-process stand-ins for the remote APIs, for adapter tests.

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port. Returns the base URL.
pub(crate) async fn spawn_fake_api(router: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), handle)
}

/// A base URL nothing is listening on.
pub(crate) async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
