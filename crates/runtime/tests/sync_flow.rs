mod support;

use std::time::Duration;

use game_core::{Command, CommandOutcome, CommandResponse};
use sync_runtime::{RequestKind, SnapshotOrigin, SyncConfig, SyncEvent, SyncRuntime};
use tokio::sync::broadcast::{Receiver, error::TryRecvError};

use support::{MockReply, MockTransport, ScriptedPush, snapshot};

fn one_shot_config() -> SyncConfig {
    SyncConfig {
        reconnect: false,
        reconnect_delay: Duration::from_millis(1),
        ..SyncConfig::default()
    }
}

fn drain(rx: &mut Receiver<SyncEvent>) -> Vec<SyncEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(_)) => continue,
        }
    }
    events
}

#[tokio::test]
async fn push_session_fetches_full_state_then_forwards_pushes() {
    let initial = snapshot(100.0, 5.0, 1, false);
    let pushed = vec![snapshot(101.0, 5.0, 1, false), snapshot(102.0, 5.0, 1, true)];

    let mut runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(MockTransport::with_state(initial.clone()))
        .push_channel(ScriptedPush::new(vec![pushed.clone()]))
        .build()
        .expect("runtime should build");
    let mut rx = runtime.subscribe_events();

    runtime.run().await.expect("push worker should finish");

    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![
            SyncEvent::Connected,
            SyncEvent::Snapshot {
                snapshot: initial,
                origin: SnapshotOrigin::Fetch,
            },
            SyncEvent::Snapshot {
                snapshot: pushed[0].clone(),
                origin: SnapshotOrigin::Push,
            },
            SyncEvent::Snapshot {
                snapshot: pushed[1].clone(),
                origin: SnapshotOrigin::Push,
            },
            SyncEvent::Disconnected,
        ]
    );
}

#[tokio::test]
async fn failed_fetch_on_connect_is_reported_without_snapshot() {
    let mut runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(MockTransport::default())
        .push_channel(ScriptedPush::new(vec![vec![]]))
        .build()
        .expect("runtime should build");
    let mut rx = runtime.subscribe_events();

    runtime.run().await.expect("push worker should finish");

    let events = drain(&mut rx);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], SyncEvent::Connected);
    assert!(matches!(
        events[1],
        SyncEvent::RequestFailed {
            request: RequestKind::FetchState,
            ..
        }
    ));
    assert_eq!(events[2], SyncEvent::Disconnected);
}

#[tokio::test]
async fn unreachable_push_channel_publishes_nothing() {
    let mut runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(MockTransport::default())
        .push_channel(ScriptedPush::new(vec![]))
        .build()
        .expect("runtime should build");
    let mut rx = runtime.subscribe_events();

    runtime.run().await.expect("push worker should finish");

    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn push_worker_reconnects_after_disconnect() {
    let config = SyncConfig {
        reconnect: true,
        reconnect_delay: Duration::from_millis(1),
        ..SyncConfig::default()
    };
    let mut runtime = SyncRuntime::builder()
        .config(config)
        .transport(MockTransport::with_state(snapshot(1.0, 1.0, 1, false)))
        .push_channel(ScriptedPush::new(vec![vec![], vec![]]))
        .build()
        .expect("runtime should build");
    let mut rx = runtime.subscribe_events();

    let task = tokio::spawn(async move {
        let _ = runtime.run().await;
    });

    let mut connects = 0;
    while connects < 2 {
        match tokio::time::timeout(Duration::from_secs(2), rx.recv()).await {
            Ok(Ok(SyncEvent::Connected)) => connects += 1,
            Ok(Ok(_)) => {}
            other => panic!("expected a second connection, got {:?}", other),
        }
    }

    task.abort();
    assert_eq!(connects, 2);
}

#[tokio::test]
async fn applied_command_publishes_returned_snapshot() {
    let after = snapshot(90.0, 6.0, 1, false);
    let transport = MockTransport::default();
    transport.reply(
        Command::BuyWarrior,
        MockReply::Respond(CommandResponse {
            success: true,
            state: Some(after.clone()),
            error: None,
        }),
    );

    let runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(transport.clone())
        .push_channel(ScriptedPush::new(vec![]))
        .build()
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut rx = handle.subscribe();

    let outcome = handle
        .execute_command(Command::BuyWarrior)
        .await
        .expect("request should succeed");

    assert_eq!(outcome, CommandOutcome::Applied(after.clone()));
    assert_eq!(
        drain(&mut rx),
        vec![SyncEvent::Snapshot {
            snapshot: after,
            origin: SnapshotOrigin::Command(Command::BuyWarrior),
        }]
    );
    assert_eq!(transport.calls(), vec![Command::BuyWarrior]);
}

#[tokio::test]
async fn rejected_command_never_publishes_a_snapshot() {
    let transport = MockTransport::default();
    transport.reply(
        Command::BuyWarrior,
        MockReply::Respond(CommandResponse {
            success: false,
            state: None,
            error: Some("insufficient gold".to_string()),
        }),
    );

    let runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(transport)
        .push_channel(ScriptedPush::new(vec![]))
        .build()
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut rx = handle.subscribe();

    let outcome = handle
        .execute_command(Command::BuyWarrior)
        .await
        .expect("request should succeed");

    assert_eq!(
        outcome,
        CommandOutcome::Rejected("insufficient gold".to_string())
    );
    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![SyncEvent::CommandRejected {
            command: Command::BuyWarrior,
            reason: "insufficient gold".to_string(),
        }]
    );
    assert!(events.iter().all(|event| event.snapshot().is_none()));
}

#[tokio::test]
async fn network_failure_is_reported_as_request_failure() {
    let transport = MockTransport::default();
    transport.reply(Command::StartBattle, MockReply::Unavailable);

    let runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(transport)
        .push_channel(ScriptedPush::new(vec![]))
        .build()
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut rx = handle.subscribe();

    let result = handle.execute_command(Command::StartBattle).await;
    assert!(result.is_err());

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        SyncEvent::RequestFailed { request, error } => {
            assert_eq!(*request, RequestKind::Command(Command::StartBattle));
            assert!(error.contains("503"));
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[tokio::test]
async fn fire_and_forget_command_reports_through_events() {
    let after = snapshot(0.0, 5.0, 1, true);
    let transport = MockTransport::default();
    transport.reply(
        Command::StartBattle,
        MockReply::Respond(CommandResponse {
            success: true,
            state: Some(after.clone()),
            error: None,
        }),
    );

    let runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(transport)
        .push_channel(ScriptedPush::new(vec![]))
        .build()
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut rx = handle.subscribe();

    handle
        .send_command(Command::StartBattle)
        .await
        .expect("command task should not panic");

    let event = rx.recv().await.expect("event should be published");
    assert_eq!(event.snapshot(), Some(&after));
}

#[tokio::test]
async fn late_subscriber_catches_up_with_refresh_request() {
    let current = snapshot(40.0, 2.0, 3, false);

    let runtime = SyncRuntime::builder()
        .config(one_shot_config())
        .transport(MockTransport::with_state(current.clone()))
        .push_channel(ScriptedPush::new(vec![]))
        .build()
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut rx = handle.subscribe();

    handle
        .request_refresh()
        .await
        .expect("refresh task should not panic");

    match rx.recv().await.expect("event should be published") {
        SyncEvent::Snapshot { snapshot, origin } => {
            assert_eq!(snapshot, current);
            assert_eq!(origin, SnapshotOrigin::Fetch);
        }
        other => panic!("unexpected event {:?}", other),
    }
}
