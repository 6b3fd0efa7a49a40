//! Guest Work Queue
//!
//! Runs the classify → respond → deliver sequence off the webhook path so
//! the transport can acknowledge immediately. One bounded single-worker
//! queue per guest (keyed by phone number) keeps replies to the same
//! guest in arrival order; distinct guests proceed in parallel. Counters
//! expose in-flight and failed work for observability.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info, warn};
use uuid::Uuid;

use concierge::{Dispatcher, Guest, MessageChannel};

/// One unit of routing work.
#[derive(Debug, Clone)]
pub struct RoutingJob {
    pub id: Uuid,
    pub guest: Guest,
    pub text: String,
    pub enqueued_at: DateTime<Utc>,
}

impl RoutingJob {
    pub fn new(guest: Guest, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            guest,
            text: text.into(),
            enqueued_at: Utc::now(),
        }
    }
}

/// Snapshot of queue counters.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct QueueStats {
    pub enqueued: u64,
    pub in_flight: u64,
    pub completed: u64,
    pub failed_delivery: u64,
    pub rejected: u64,
    /// Guests with a live worker.
    pub active_guests: usize,
}

#[derive(Default)]
struct Counters {
    enqueued: AtomicU64,
    in_flight: AtomicU64,
    completed: AtomicU64,
    failed_delivery: AtomicU64,
    rejected: AtomicU64,
}

/// Bounded, per-guest-ordered background processor.
#[derive(Clone)]
pub struct GuestWorkQueue {
    dispatcher: Arc<Dispatcher>,
    channel: Arc<dyn MessageChannel>,
    capacity: usize,
    senders: Arc<Mutex<HashMap<String, mpsc::Sender<RoutingJob>>>>,
    counters: Arc<Counters>,
}

impl GuestWorkQueue {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        channel: Arc<dyn MessageChannel>,
        capacity: usize,
    ) -> Self {
        Self {
            dispatcher,
            channel,
            capacity: capacity.max(1),
            senders: Arc::new(Mutex::new(HashMap::new())),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Enqueue a routing job for the guest's worker.
    ///
    /// Returns false when the guest's queue is full; the message is
    /// dropped and counted rather than blocking the webhook responder.
    pub async fn enqueue(&self, job: RoutingJob) -> bool {
        let key = job.guest.phone_number.clone();
        let sender = self.worker_for(&key).await;

        match sender.try_send(job) {
            Ok(()) => {
                self.counters.enqueued.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(mpsc::error::TrySendError::Full(job)) => {
                self.counters.rejected.fetch_add(1, Ordering::Relaxed);
                warn!(job_id = %job.id, guest = %key, "Guest queue full, dropping message");
                false
            }
            Err(mpsc::error::TrySendError::Closed(job)) => {
                // Worker exited between lookup and send; rebuild it once.
                self.senders.lock().await.remove(&key);
                let sender = self.worker_for(&key).await;
                match sender.try_send(job) {
                    Ok(()) => {
                        self.counters.enqueued.fetch_add(1, Ordering::Relaxed);
                        true
                    }
                    Err(err) => {
                        self.counters.rejected.fetch_add(1, Ordering::Relaxed);
                        error!(error = %err, guest = %key, "Failed to requeue after worker restart");
                        false
                    }
                }
            }
        }
    }

    /// Current counter values.
    pub async fn stats(&self) -> QueueStats {
        QueueStats {
            enqueued: self.counters.enqueued.load(Ordering::Relaxed),
            in_flight: self.counters.in_flight.load(Ordering::Relaxed),
            completed: self.counters.completed.load(Ordering::Relaxed),
            failed_delivery: self.counters.failed_delivery.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
            active_guests: self.senders.lock().await.len(),
        }
    }

    async fn worker_for(&self, key: &str) -> mpsc::Sender<RoutingJob> {
        let mut senders = self.senders.lock().await;
        if let Some(sender) = senders.get(key) {
            return sender.clone();
        }

        let (tx, rx) = mpsc::channel(self.capacity);
        senders.insert(key.to_string(), tx.clone());

        let dispatcher = self.dispatcher.clone();
        let channel = self.channel.clone();
        let counters = self.counters.clone();
        let guest_key = key.to_string();
        tokio::spawn(async move {
            run_worker(guest_key, rx, dispatcher, channel, counters).await;
        });

        tx
    }
}

async fn run_worker(
    guest_key: String,
    mut rx: mpsc::Receiver<RoutingJob>,
    dispatcher: Arc<Dispatcher>,
    channel: Arc<dyn MessageChannel>,
    counters: Arc<Counters>,
) {
    info!(guest = %guest_key, "Guest worker started");

    while let Some(job) = rx.recv().await {
        counters.in_flight.fetch_add(1, Ordering::Relaxed);
        info!(job_id = %job.id, guest = %guest_key, "Processing guest message");

        let reply = dispatcher.handle(&job.text, &job.guest).await;

        match channel.deliver(&job.guest.phone_number, &reply).await {
            Ok(()) => {
                counters.completed.fetch_add(1, Ordering::Relaxed);
                info!(job_id = %job.id, guest = %guest_key, "Reply delivered");
            }
            Err(err) => {
                // Delivery is best-effort; the failure never feeds back
                // into routing.
                counters.failed_delivery.fetch_add(1, Ordering::Relaxed);
                error!(job_id = %job.id, guest = %guest_key, error = %err, "Delivery failed");
            }
        }
        counters.in_flight.fetch_sub(1, Ordering::Relaxed);
    }

    info!(guest = %guest_key, "Guest worker stopped");
}
