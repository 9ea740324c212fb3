//! End-to-end tests for the bridge client against a live server.
//!
//! Each test binds a bridge on `127.0.0.1:0`, so tests run in parallel
//! without port clashes, and inspects the server's queue directly.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use luanti_bridge_client::{AgentClient, ClientConfig, ClientError};
use luanti_bridge_server::{AppState, spawn_server};
use luanti_bridge_types::{Action, Command, Direction};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

async fn start_bridge() -> (Arc<AppState>, String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new());
    let handle = spawn_server(listener, Arc::clone(&state));
    (state, format!("http://{addr}"), handle)
}

#[tokio::test]
async fn send_action_reaches_queue() {
    let (state, url, handle) = start_bridge().await;
    let client = AgentClient::new(ClientConfig::with_url(url));

    assert!(client.send_action(&Action::forward()).await);

    let drained = state.queue.drain();
    assert_eq!(drained, vec![Command::Action(Action::forward())]);

    handle.abort();
}

#[tokio::test]
async fn send_actions_preserves_order() {
    let (state, url, handle) = start_bridge().await;
    let client = AgentClient::new(ClientConfig::with_url(url));

    let actions = vec![
        Action::chat("Starting visibility demo!"),
        Action::set_observation_options(false),
        Action::move_at(Direction::Left, 0.5),
        Action::rotate(Some(0.3), None),
        Action::place_default(),
    ];
    assert!(client.send_actions(&actions).await);

    let drained = state.queue.drain();
    let expected: Vec<Command> = actions.into_iter().map(Command::from).collect();
    assert_eq!(drained, expected);

    handle.abort();
}

#[tokio::test]
async fn health_reports_true_when_up() {
    let (_state, url, handle) = start_bridge().await;
    let client = AgentClient::new(ClientConfig::with_url(url));

    assert!(client.health().await);

    handle.abort();
}

#[tokio::test]
async fn empty_batch_is_rejected_by_bridge() {
    let (state, url, handle) = start_bridge().await;
    let client = AgentClient::new(ClientConfig::with_url(url));

    assert!(!client.send_actions(&[]).await);
    assert!(matches!(
        client.try_send_actions(&[]).await,
        Err(ClientError::Status(400))
    ));
    assert!(state.queue.is_empty());

    handle.abort();
}

#[tokio::test]
async fn invalid_action_is_not_sent() {
    let (state, url, handle) = start_bridge().await;
    let client = AgentClient::new(ClientConfig::with_url(url));

    let batch = [Action::Dig, Action::move_at(Direction::Forward, -1.0)];
    assert!(!client.send_actions(&batch).await);
    assert!(matches!(
        client.try_send_action(&Action::move_at(Direction::Up, 0.0)).await,
        Err(ClientError::InvalidAction(_))
    ));
    assert!(state.queue.is_empty());

    handle.abort();
}

#[tokio::test]
async fn unreachable_bridge_reports_false() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AgentClient::new(ClientConfig::with_url(format!("http://{addr}")));

    assert!(!client.send_action(&Action::Use).await);
    assert!(!client.health().await);
    assert!(matches!(
        client.try_send_action(&Action::Use).await,
        Err(ClientError::Transport(_))
    ));
}

#[tokio::test]
async fn silent_bridge_times_out() {
    // Accepts connections at the socket level but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ClientConfig {
        server_url: format!("http://{addr}"),
        timeout: Duration::from_millis(200),
    };
    let client = AgentClient::new(config);

    let started = Instant::now();
    assert!(!client.send_action(&Action::Dig).await);
    assert!(started.elapsed() < Duration::from_secs(5));

    drop(listener);
}
