#![allow(dead_code)]

use std::net::TcpListener;
use std::thread;

use axum::Router;
use vitrine::App;

/// Catalog document with three apps, in the shape the endpoint serves.
pub const CATALOG_JSON: &str = r##"[
    {"app_id": "slack", "name": "Slack", "color": "#4A154B", "icon": "https://cdn.example/slack.svg", "link": "https://example/slack"},
    {"app_id": "trello", "name": "Trello", "color": "#0079BF", "icon": "https://cdn.example/trello.svg", "link": "https://example/trello"},
    {"app_id": "gmail", "name": "Gmail", "color": "#EA4335", "icon": "https://cdn.example/gmail.svg", "link": "https://example/gmail"}
]"##;

/// Serves `router` on an ephemeral local port and returns its base URL.
///
/// The server runs on its own tokio runtime in a background thread and lives
/// until the test process exits.
pub fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("build tokio runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router).await.expect("serve");
        });
    });

    format!("http://{addr}")
}

/// A local address nothing is listening on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

pub fn app(app_id: &str, name: &str) -> App {
    App::new(
        app_id,
        name,
        "#000000",
        format!("https://cdn.example/{app_id}.svg"),
        format!("https://example/{app_id}"),
    )
}
