//! Single-writer actor for serialized SQLite writes.
//!
//! SQLite allows one writer at a time. All repository writes are funneled
//! through one background task holding a dedicated connection; each job runs
//! inside an immediate transaction.

use std::any::Any;
use std::sync::Arc;

use diesel::{Connection, SqliteConnection};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use stride_core::errors::Result;

// A write job: runs against the writer's connection and returns a type-erased
// result so one channel can carry jobs of different return types.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send + 'static>> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection
    /// and waits for its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor channel closed");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor returned an unexpected type"))
            })
    }
}

/// Spawns the background writer task. It holds one connection from the pool
/// for its whole lifetime and processes jobs serially, wrapping each in an
/// immediate transaction.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) =
        mpsc::channel::<(Job, oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to acquire the writer actor's connection");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // Receiver may have been dropped (request cancelled); not an error.
            let _ = reply_tx.send(result);
        }
        // Channel closed: all WriteHandles dropped, actor exits.
    });

    WriteHandle { tx }
}
