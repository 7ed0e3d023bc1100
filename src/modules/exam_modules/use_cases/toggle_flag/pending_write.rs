use crate::modules::exam_modules::core::row::{Flag, RowKey};
use crate::modules::exam_modules::ports::RemoteError;
use tokio::task::JoinHandle;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Confirmed,
    Failed(RemoteError),
}

/// A sheet write in flight. Dropping it does not cancel the write.
#[derive(Debug)]
pub struct PendingWrite {
    pub write_id: Uuid,
    pub key: RowKey,
    pub flag: Flag,
    pub value: bool,
    handle: JoinHandle<WriteOutcome>,
}

impl PendingWrite {
    pub fn new(
        write_id: Uuid,
        key: RowKey,
        flag: Flag,
        value: bool,
        handle: JoinHandle<WriteOutcome>,
    ) -> Self {
        Self {
            write_id,
            key,
            flag,
            value,
            handle,
        }
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn outcome(self) -> WriteOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(err) => WriteOutcome::Failed(RemoteError::Backend(format!(
                "write task did not complete: {err}"
            ))),
        }
    }
}
