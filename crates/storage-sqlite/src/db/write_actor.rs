//! Single-writer actor: every mutation funnels through one dedicated
//! connection so SQLite never sees concurrent writers. Each job runs inside
//! an immediate transaction.

use std::any::Any;

use diesel::{Connection, SqliteConnection};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use folio_core::errors::Result;

// Jobs are type-erased so one channel can carry every return type; the
// handle downcasts on the way out.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send>> + Send>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, Reply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer connection inside an immediate transaction
    /// and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Any + Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let erased: Job =
            Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>));
        self.tx
            .send((erased, reply_tx))
            .await
            .expect("writer actor stopped; its receiving channel is closed");
        reply_rx
            .await
            .expect("writer actor dropped the reply sender without a result")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .expect("writer actor result downcast mismatch")
            })
    }
}

/// Spawns the background task owning the writer connection and returns a
/// handle for submitting jobs.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, Reply)>(256);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to acquire the writer connection from the pool");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Into::into);
            // The receiver may have been dropped (request cancelled); the
            // transaction already committed or rolled back either way.
            let _ = reply_tx.send(result);
        }
        // Channel closed: all handles dropped, actor terminates.
    });

    WriteHandle { tx }
}
