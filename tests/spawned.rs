//! Gathering handles to tasks spawned on a tokio runtime.
//!
//! Task handles resolve to `Result<T, JoinError>`, so a panicking task shows
//! up as a missing slot, and dropping an abandoned handle detaches the task
//! instead of stopping it.

use futures_gather::gather_until;
use futures_gather::prelude::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

fn spawn_after<T: Send + 'static>(value: T, delay: Duration) -> JoinHandle<T> {
    tokio::spawn(async move {
        sleep(delay).await;
        value
    })
}

#[tokio::test]
async fn join_handles_as_operations() {
    let required = vec![
        spawn_after("fast", Duration::from_millis(10)),
        spawn_after("glacial", Duration::from_secs(5)),
    ];
    let optional = vec![spawn_after(7u8, Duration::from_millis(10))];

    let output = gather_until(
        required,
        sleep(Duration::from_millis(200)),
        optional,
        sleep(Duration::from_millis(100)),
    )
    .await;

    assert_eq!(output.required, Some(vec![Some("fast"), None]));
    assert_eq!(output.optional, Some(vec![Some(7)]));
}

async fn explode() -> u8 {
    panic!("upstream exploded")
}

#[tokio::test]
async fn panicking_task_is_a_missing_slot() {
    let required: Vec<JoinHandle<u8>> = vec![tokio::spawn(explode()), tokio::spawn(async { 1 })];
    let optional: Vec<JoinHandle<u8>> = vec![];

    let output = (required, optional)
        .gather_until(sleep(Duration::from_secs(1)), sleep(Duration::from_secs(1)))
        .await;

    assert_eq!(output.required, Some(vec![None, Some(1)]));
    assert_eq!(output.optional, None);
}

#[tokio::test]
async fn abandoned_tasks_keep_running() {
    let finished = Arc::new(AtomicBool::new(false));
    let task = {
        let finished = finished.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(150)).await;
            finished.store(true, Ordering::SeqCst);
        })
    };
    let optional: Vec<JoinHandle<()>> = vec![];

    let output = gather_until(
        vec![task],
        sleep(Duration::from_millis(20)),
        optional,
        sleep(Duration::from_millis(20)),
    )
    .await;
    assert_eq!(output.required_flags(), Some(vec![false]));
    assert!(!finished.load(Ordering::SeqCst));

    sleep(Duration::from_millis(400)).await;
    assert!(finished.load(Ordering::SeqCst));
}

#[tokio::test]
async fn oneshot_receivers_as_operations() {
    let (tx, rx) = futures::channel::oneshot::channel::<&str>();
    let (dropped_tx, dropped_rx) = futures::channel::oneshot::channel::<&str>();
    drop(dropped_tx);

    tokio::spawn(async move {
        sleep(Duration::from_millis(10)).await;
        let _ = tx.send("pong");
    });

    let output = (vec![rx], vec![dropped_rx])
        .gather_until(sleep(Duration::from_secs(1)), sleep(Duration::from_secs(1)))
        .await;

    assert_eq!(output.required, Some(vec![Some("pong")]));
    assert_eq!(output.optional, Some(vec![None]));
}
