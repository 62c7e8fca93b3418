use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::{accept_async, tungstenite::Message};

use sync_runtime::{PushChannel, SyncConfig, WebSocketPush};

const OPEN: &str = r#"0{"sid":"s1","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#;

#[tokio::test]
async fn socketio_session_delivers_game_state() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();

        ws.send(Message::text(OPEN)).await.unwrap();
        let connect = ws.next().await.unwrap().unwrap();
        assert_eq!(connect.to_text().unwrap(), "40");
        ws.send(Message::text(r#"40{"sid":"n1"}"#)).await.unwrap();

        ws.send(Message::text("2")).await.unwrap();
        let pong = ws.next().await.unwrap().unwrap();
        assert_eq!(pong.to_text().unwrap(), "3");

        ws.send(Message::text(
            r#"42["game_state",{"resources":{"gold":12.5,"warriors":3},"battle":{"wave":2}}]"#,
        ))
        .await
        .unwrap();
        ws.send(Message::text("41")).await.unwrap();

        // Keep the socket open until the client walks away.
        let _ = ws.next().await;
    });

    let config = SyncConfig {
        server_url: format!("http://{addr}"),
        ..SyncConfig::default()
    };
    let mut push = WebSocketPush::new(&config).unwrap();
    let mut snapshots = push.connect().await.expect("handshake should succeed");

    let snapshot = tokio::time::timeout(Duration::from_secs(5), snapshots.next())
        .await
        .expect("push should arrive")
        .expect("stream open")
        .expect("snapshot decodes");
    assert_eq!(snapshot.resources.warrior_count(), 3);
    assert_eq!(snapshot.battle.wave, 2);

    let end = tokio::time::timeout(Duration::from_secs(5), snapshots.next())
        .await
        .expect("stream should end");
    assert!(end.is_none());

    drop(snapshots);
    server.await.unwrap();
}

#[tokio::test]
async fn connect_fails_without_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = SyncConfig {
        server_url: format!("http://{addr}"),
        ..SyncConfig::default()
    };
    let mut push = WebSocketPush::new(&config).unwrap();
    assert!(push.connect().await.is_err());
}
