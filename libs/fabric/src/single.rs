use std::fmt;
use std::future::Future;
use std::pin::Pin;

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::error::{Error, Result};

type BoxFuture<T> = Pin<Box<dyn Future<Output = Result<T>> + Send>>;

/// Create a single-emission channel
pub fn single<T>() -> (Emitter<T>, Single<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Emitter { tx },
        Single {
            inner: Inner::Spawned(rx),
        },
    )
}

/// Sending half of a single-emission channel
///
/// `emit` consumes the emitter, so at most one result is ever sent.
#[derive(Debug)]
pub struct Emitter<T> {
    tx: oneshot::Sender<Result<T>>,
}

impl<T> Emitter<T> {
    /// Send the one result. Dropped silently if the consumer already left.
    pub fn emit(self, result: Result<T>) {
        if self.tx.send(result).is_err() {
            tracing::debug!("single emission dropped, consumer gone");
        }
    }
}

/// Receiving half of a single-emission channel
///
/// Resolves to the emitted value or error. The result is observed on
/// whichever task awaits it.
pub struct Single<T> {
    inner: Inner<T>,
}

enum Inner<T> {
    /// Work already running on a runtime
    Spawned(oneshot::Receiver<Result<T>>),
    /// No runtime at creation, driven by `first_value`
    Deferred(BoxFuture<T>),
}

impl<T: Send + 'static> Single<T> {
    /// Run `future` on the current tokio runtime and emit its output
    ///
    /// Outside a runtime nothing is spawned; the future runs when
    /// [`Single::first_value`] is awaited instead.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        match Handle::try_current() {
            Ok(handle) => Self::spawn_on(&handle, future),
            Err(_) => {
                tracing::debug!("no runtime on this thread, deferring work to the consumer");
                Self::deferred(future)
            }
        }
    }

    /// Run `future` on the given runtime and emit its output
    ///
    /// Usable from any thread, including ones with no runtime of their own.
    pub fn spawn_on<F>(handle: &Handle, future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (emitter, single) = single();
        handle.spawn(async move {
            emitter.emit(future.await);
        });
        single
    }

    /// Hold `future` unstarted until the consumer awaits the result
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            inner: Inner::Deferred(Box::pin(future)),
        }
    }
}

impl<T> Single<T> {
    /// Wait for the one emission
    ///
    /// Fails with [`Error::NoResponse`] if the sender finished without
    /// emitting. Consumes the channel, so nothing stays subscribed.
    pub async fn first_value(self) -> Result<T> {
        match self.inner {
            Inner::Spawned(rx) => match rx.await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!("channel closed without emitting");
                    Err(Error::NoResponse)
                }
            },
            Inner::Deferred(future) => future.await,
        }
    }
}

impl<T> fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.inner {
            Inner::Spawned(_) => "spawned",
            Inner::Deferred(_) => "deferred",
        };
        f.debug_struct("Single").field("state", &state).finish()
    }
}
