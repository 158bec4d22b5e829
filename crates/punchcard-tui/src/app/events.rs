//! Event plumbing for the TUI
//!
//! Keyboard input and timers run as background tasks feeding one mpsc
//! channel, and async API calls post their outcomes back the same way, so
//! all state mutation happens on the main loop. A PIN session is therefore
//! only ever touched between renders, never from two tasks at once.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use punchcard_api::ClockOutcome;
use punchcard_core::{Employee, ReportRow, TimeEntry, LOCKOUT_TICK_MS};

/// Employee profile plus their recent clock events
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub employee: Employee,
    pub entries: Vec<TimeEntry>,
}

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// UI animation tick
    Tick,
    /// One second of lockout elapsed
    LockoutTick,
    /// PIN verification came back
    Verification(Result<Employee, String>),
    /// Clock registration finished
    Clock(Result<ClockOutcome, String>),
    /// Pay report fetch finished
    Report(Result<Vec<ReportRow>, String>),
    /// Profile fetch finished
    Profile(Result<ProfileData, String>),
    /// Profile picture change finished
    Picture(Result<Employee, String>),
}

/// Event handler backed by background input and tick tasks
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
    input_task: JoinHandle<()>,
    tick_task: JoinHandle<()>,
}

impl EventHandler {
    /// Spawn the input and tick tasks
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let tx = sender.clone();
        let input_task = tokio::spawn(async move {
            let mut stream = EventStream::new();
            while let Some(Ok(event)) = stream.next().await {
                if let CrosstermEvent::Key(key) = event {
                    if tx.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
            }
        });

        let tx = sender.clone();
        let tick_task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self {
            sender,
            receiver,
            input_task,
            tick_task,
        }
    }

    /// Get a clone of the sender for spawned API tasks
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Receive the next event
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.input_task.abort();
        self.tick_task.abort();
    }
}

/// Handle to the 1-second lockout countdown task
///
/// Spawned exactly when a PIN session locks and dropped when it unlocks or
/// the session goes away. Dropping the handle aborts the task, so teardown
/// on any exit path stops the countdown; a tick can never reach a session
/// that no longer exists.
pub struct LockoutTicker {
    handle: JoinHandle<()>,
}

impl LockoutTicker {
    /// Spawn the countdown task
    pub fn spawn(tx: mpsc::UnboundedSender<Event>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(LOCKOUT_TICK_MS));
            // The first tick of a tokio interval fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Event::LockoutTick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for LockoutTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
