//! Event publishing/subscription abstraction (mechanics only).
//!
//! A lightweight pub/sub seam between the cart store and its observers.
//! The bus makes minimal assumptions:
//!
//! - **Transport-agnostic**: the contract fits in-memory channels as well as
//!   anything heavier.
//! - **At-least-once delivery**: a message may reach a subscriber more than
//!   once; subscribers must be idempotent (re-read the store, don't apply
//!   deltas).
//! - **No persistence**: the bus distributes notifications, it does not
//!   store them. The publishing store remains the source of truth.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a notification stream.
///
/// Each subscription gets a copy of every message published after it was
/// taken (broadcast semantics). Subscriptions are designed for
/// single-threaded consumption: one view, one subscription.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued, returning how many messages were
    /// discarded. Useful for observers that only need "something changed".
    pub fn drain(&self) -> usize {
        let mut n = 0;
        while self.try_recv().is_ok() {
            n += 1;
        }
        n
    }
}

/// Domain-agnostic notification bus (pub/sub abstraction).
///
/// `publish()` can fail (implementation-specific); since the publishing
/// store already committed its state change, a failed publish loses a
/// notification, never data.
///
/// The trait requires `Send + Sync` so a bus can sit inside a shared store;
/// publishing is safe from any thread even though the storefront itself is
/// single-threaded and event-driven.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
