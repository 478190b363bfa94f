use std::sync::Arc;

use chatpane::prelude::*;
use chatpane::MountError;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_mounted_widget_round_trips_through_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "assistant", "content": "Hi! Start a new chat on the left."},
                {"role": "user", "content": "ping"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"reply":"pong"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut host = WidgetHost::new(Arc::new(MemoryStorage::new())).with_target(DEFAULT_MOUNT_SELECTOR);
    let handle = host
        .mount(
            DEFAULT_MOUNT_SELECTOR,
            MountOptions::new().backend_url(format!("{}/api/chat", server.url())),
        )
        .unwrap();

    let widget = host.widget_mut(&handle).unwrap();
    let reply = widget.send_text("ping").await.unwrap();

    assert_eq!(reply.content, "pong");
    assert_eq!(widget.title(), "ping");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remount_restores_saved_threads() {
    let storage = Arc::new(MemoryStorage::new());
    let mut host = WidgetHost::new(storage).with_target(DEFAULT_MOUNT_SELECTOR);

    let first = host.mount(DEFAULT_MOUNT_SELECTOR, MountOptions::new()).unwrap();
    {
        let widget = host.widget_mut(&first).unwrap();
        widget.send_text("keep this").await;
        widget.new_chat();
    }
    assert!(host.unmount(&first));

    let second = host.mount(DEFAULT_MOUNT_SELECTOR, MountOptions::new()).unwrap();
    let widget = host.widget(&second).unwrap();
    assert_eq!(widget.threads().len(), 2);
    assert!(widget.threads().iter().any(|t| t.title == "keep this"));
}

#[test]
fn test_unknown_target_is_an_error() {
    let mut host = WidgetHost::new(Arc::new(MemoryStorage::new()));
    assert!(matches!(
        host.mount(DEFAULT_MOUNT_SELECTOR, MountOptions::new()),
        Err(MountError::TargetNotFound(_))
    ));
}
