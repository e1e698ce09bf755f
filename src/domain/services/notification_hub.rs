//! Push notifications for booking events.
//!
//! Publishers write to a broadcast channel. Every signed-in session gets a
//! subscription task that filters the stream down to what is addressed to
//! its user and appends it to an in-memory inbox. The subscription lives from
//! login to logout of that session; other sessions of the same user keep
//! their own.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::models::notification::{Notification, Recipient};

/// Oldest entries are dropped past this.
pub const INBOX_CAPACITY: usize = 200;

type Inbox = Arc<Mutex<VecDeque<Notification>>>;

struct Subscription {
    user_id: String,
    inbox: Inbox,
    task: JoinHandle<()>,
}

pub struct NotificationHub {
    sender: broadcast::Sender<Notification>,
    subscriptions: Mutex<HashMap<String, Subscription>>,
}

impl NotificationHub {
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size.max(1));
        Self {
            sender,
            subscriptions: Mutex::new(HashMap::new()),
        }
    }

    pub fn publish(&self, notification: Notification) {
        match self.sender.send(notification) {
            Ok(receivers) => debug!("Notification fanned out to {} subscribers", receivers),
            Err(_) => debug!("Notification dropped: no active subscribers"),
        }
    }

    /// Opens a subscription for the session. A second call while one is
    /// already open keeps the existing inbox.
    pub fn subscribe(&self, session_id: &str, user_id: &str, is_admin: bool) {
        let mut subs = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = subs.get(session_id)
            && !existing.task.is_finished() {
            return;
        }

        let inbox: Inbox = Arc::new(Mutex::new(VecDeque::new()));
        let mut rx = self.sender.subscribe();
        let sink = inbox.clone();
        let owner = user_id.to_string();

        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(notification) => {
                        if is_addressed_to(&notification, &owner, is_admin) {
                            let mut entries = sink.lock().unwrap_or_else(|e| e.into_inner());
                            if entries.len() == INBOX_CAPACITY {
                                entries.pop_front();
                            }
                            entries.push_back(notification);
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Notification subscriber {} lagged, skipped {} messages", owner, skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        subs.insert(session_id.to_string(), Subscription { user_id: user_id.to_string(), inbox, task });
        info!("Notification subscription opened for {} (session {})", user_id, session_id);
    }

    pub fn unsubscribe(&self, session_id: &str) {
        let removed = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner()).remove(session_id);
        if let Some(sub) = removed {
            sub.task.abort();
            info!("Notification subscription closed for {} (session {})", sub.user_id, session_id);
        }
    }

    /// Closes every session of the user.
    pub fn unsubscribe_user(&self, user_id: &str) {
        let mut subs = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|_, sub| {
            if sub.user_id == user_id {
                sub.task.abort();
                false
            } else {
                true
            }
        });
        info!("Notification subscriptions closed for {}", user_id);
    }

    pub fn is_subscribed(&self, session_id: &str) -> bool {
        self.subscriptions.lock().unwrap_or_else(|e| e.into_inner()).contains_key(session_id)
    }

    pub fn has_subscription_for(&self, user_id: &str) -> bool {
        self.subscriptions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .any(|sub| sub.user_id == user_id)
    }

    /// Snapshot of the session's inbox, oldest first.
    pub fn inbox(&self, session_id: &str) -> Vec<Notification> {
        let subs = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        subs.get(session_id)
            .map(|s| s.inbox.lock().unwrap_or_else(|e| e.into_inner()).iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn is_addressed_to(notification: &Notification, user_id: &str, is_admin: bool) -> bool {
    match &notification.recipient {
        Recipient::Admins => is_admin,
        Recipient::User(id) => id == user_id,
    }
}
