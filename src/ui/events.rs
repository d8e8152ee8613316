use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Unified TUI events
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Merges terminal input and a periodic tick into one channel
pub struct EventManager {
    event_sender: mpsc::Sender<TuiEvent>,
    event_receiver: mpsc::Receiver<TuiEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl EventManager {
    /// Create a new event manager without any sources attached
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<TuiEvent>(100);
        Self {
            event_sender,
            event_receiver,
            tasks: Vec::new(),
        }
    }

    /// Start reading terminal events and emitting a tick every `tick_rate`
    pub fn start(&mut self, tick_rate: Duration) {
        let sender = self.event_sender.clone();
        self.tasks.push(tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(event) = reader.next().await {
                let event = match event {
                    // Ignore key releases so each press acts once
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => TuiEvent::Key(key),
                    Ok(Event::Resize(w, h)) => TuiEvent::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        warn!("Terminal event stream error: {}", e);
                        break;
                    }
                };
                if sender.send(event).await.is_err() {
                    break;
                }
            }
            debug!("Terminal event reader stopped");
        }));

        let sender = self.event_sender.clone();
        self.tasks.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if sender.send(TuiEvent::Tick).await.is_err() {
                    break;
                }
            }
        }));
    }

    /// Send an event
    pub async fn send_event(&self, event: TuiEvent) -> Result<()> {
        self.event_sender.send(event).await?;
        Ok(())
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive(&mut self) -> Option<TuiEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive an event
    pub async fn receive(&mut self) -> Option<TuiEvent> {
        self.event_receiver.recv().await
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventManager {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
