//! Iframe channel tests

use cyoc_playground::comm::{ChannelEvent, ChannelEventKind, IframeChannel};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

fn counter(channel: &IframeChannel, kind: ChannelEventKind, once: bool) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    let callback = move |_: &ChannelEvent| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    };
    if once {
        channel.once(kind, callback);
    } else {
        channel.on(kind, callback);
    }
    count
}

#[test]
fn test_malformed_messages_are_dropped() {
    let channel = IframeChannel::new();
    let count = counter(&channel, ChannelEventKind::HideAllContextMenus, false);

    assert!(!channel.handle_message(&json!("HideAllContextMenus")));
    assert!(!channel.handle_message(&json!({ "type": 1, "payload": null })));
    assert!(!channel.handle_message(&json!({ "type": "HideAllContextMenus" })));
    assert!(!channel.handle_message(&json!({ "type": "Unknown", "payload": null })));
    assert_eq!(count.load(Ordering::SeqCst), 0);

    assert!(channel.handle_message(&json!({ "type": "HideAllContextMenus", "payload": null })));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_once_listener_fires_once() {
    let channel = IframeChannel::new();
    let once = counter(&channel, ChannelEventKind::RenderCompleted, true);
    let always = counter(&channel, ChannelEventKind::RenderCompleted, false);

    let message = json!({ "type": "RenderCompleted", "payload": null });
    channel.handle_message(&message);
    channel.handle_message(&message);

    assert_eq!(once.load(Ordering::SeqCst), 1);
    assert_eq!(always.load(Ordering::SeqCst), 2);
    assert_eq!(channel.listener_count(ChannelEventKind::RenderCompleted), 1);
}

#[test]
fn test_off_removes_listener() {
    let channel = IframeChannel::new();
    let id = channel.on(ChannelEventKind::HideAllContextMenus, |_| {});
    assert_eq!(channel.listener_count(ChannelEventKind::HideAllContextMenus), 1);

    channel.off(ChannelEventKind::HideAllContextMenus, id);
    assert_eq!(channel.listener_count(ChannelEventKind::HideAllContextMenus), 0);
}

#[test]
fn test_emit_posts_type_and_payload() {
    let channel = IframeChannel::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Value>();

    channel.emit(&ChannelEvent::RenderCompleted, &tx).unwrap();

    let message = rx.try_recv().unwrap();
    insta::assert_json_snapshot!(message, @r#"
    {
      "type": "RenderCompleted",
      "payload": null
    }
    "#);
}
