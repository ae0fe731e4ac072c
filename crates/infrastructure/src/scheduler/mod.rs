//! Cron-based task scheduler for recurring tasks
//!
//! Registers the periodic synchronization closure from
//! [`crate::scheduled_tasks`] on a cron expression and tracks per-task
//! success/failure counts. Uses `tokio-cron-scheduler` for the timer;
//! the tasks themselves stay plain closures so the application core
//! never sees the scheduling machinery.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use futures::future::BoxFuture;
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{debug, error, info};

/// Scheduler errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Invalid cron expression
    #[error("Invalid cron expression: {0}")]
    InvalidCronExpression(String),

    /// Scheduler failed to start
    #[error("Scheduler failed to start: {0}")]
    StartupFailed(String),

    /// Internal scheduler error
    #[error("Internal scheduler error: {0}")]
    Internal(String),
}

impl From<JobSchedulerError> for SchedulerError {
    fn from(err: JobSchedulerError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Task closure type accepted by the scheduler
pub type TaskFn = Arc<dyn Fn() -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

/// Statistics for a scheduled task
#[derive(Debug, Clone)]
pub struct TaskStats {
    /// Task name
    pub name: String,
    /// Cron expression
    pub cron_expression: String,
    /// Number of successful executions
    pub success_count: u64,
    /// Number of failed executions
    pub failure_count: u64,
    /// Last error message
    pub last_error: Option<String>,
}

struct TaskMetadata {
    name: String,
    cron_expression: String,
    success_count: AtomicU64,
    failure_count: AtomicU64,
    last_error: RwLock<Option<String>>,
}

impl TaskMetadata {
    fn new(name: String, cron_expression: String) -> Self {
        Self {
            name,
            cron_expression,
            success_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
            last_error: RwLock::new(None),
        }
    }

    fn to_stats(&self) -> TaskStats {
        TaskStats {
            name: self.name.clone(),
            cron_expression: self.cron_expression.clone(),
            success_count: self.success_count.load(Ordering::Relaxed),
            failure_count: self.failure_count.load(Ordering::Relaxed),
            last_error: self.last_error.read().clone(),
        }
    }
}

/// Scheduler for recurring tasks
pub struct TaskScheduler {
    scheduler: AsyncMutex<JobScheduler>,
    tasks: Arc<RwLock<HashMap<String, Arc<TaskMetadata>>>>,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("tasks", &self.tasks.read().len())
            .finish_non_exhaustive()
    }
}

impl TaskScheduler {
    /// Create a new scheduler (not yet started)
    pub async fn new() -> Result<Self, SchedulerError> {
        let scheduler = JobScheduler::new().await?;
        Ok(Self {
            scheduler: AsyncMutex::new(scheduler),
            tasks: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Register a task under a cron expression
    pub async fn add_task(
        &self,
        name: impl Into<String>,
        cron_expression: impl Into<String>,
        task: TaskFn,
    ) -> Result<(), SchedulerError> {
        let name = name.into();
        let cron_expression = cron_expression.into();
        let metadata = Arc::new(TaskMetadata::new(name.clone(), cron_expression.clone()));

        let job_metadata = Arc::clone(&metadata);
        let job = Job::new_async(cron_expression.as_str(), move |_uuid, _scheduler| {
            let task = Arc::clone(&task);
            let metadata = Arc::clone(&job_metadata);
            Box::pin(async move {
                debug!(task = %metadata.name, "Scheduled task starting");
                match task().await {
                    Ok(()) => {
                        metadata.success_count.fetch_add(1, Ordering::Relaxed);
                        debug!(task = %metadata.name, "Scheduled task completed");
                    },
                    Err(message) => {
                        metadata.failure_count.fetch_add(1, Ordering::Relaxed);
                        *metadata.last_error.write() = Some(message.clone());
                        error!(task = %metadata.name, error = %message, "Scheduled task failed");
                    },
                }
            })
        })
        .map_err(|e| SchedulerError::InvalidCronExpression(format!("{cron_expression}: {e}")))?;

        self.scheduler.lock().await.add(job).await?;
        self.tasks.write().insert(name.clone(), metadata);

        info!(task = %name, cron = %cron_expression, "Scheduled task registered");
        Ok(())
    }

    /// Start firing registered tasks
    pub async fn start(&self) -> Result<(), SchedulerError> {
        self.scheduler
            .lock()
            .await
            .start()
            .await
            .map_err(|e| SchedulerError::StartupFailed(e.to_string()))?;
        info!(tasks = self.tasks.read().len(), "Task scheduler started");
        Ok(())
    }

    /// Stop the scheduler
    pub async fn shutdown(&self) -> Result<(), SchedulerError> {
        self.scheduler.lock().await.shutdown().await?;
        info!("Task scheduler stopped");
        Ok(())
    }

    /// Statistics for all registered tasks
    pub fn stats(&self) -> Vec<TaskStats> {
        self.tasks
            .read()
            .values()
            .map(|metadata| metadata.to_stats())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_task() -> TaskFn {
        Arc::new(|| Box::pin(async { Ok(()) }))
    }

    #[tokio::test]
    async fn register_and_shutdown() {
        let scheduler = TaskScheduler::new().await.unwrap();
        scheduler
            .add_task("history_sync", "0 */10 * * * *", noop_task())
            .await
            .unwrap();

        let stats = scheduler.stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "history_sync");
        assert_eq!(stats[0].cron_expression, "0 */10 * * * *");
        assert_eq!(stats[0].success_count, 0);

        scheduler.start().await.unwrap();
        scheduler.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_cron_is_rejected() {
        let scheduler = TaskScheduler::new().await.unwrap();
        let result = scheduler
            .add_task("broken", "not a cron", noop_task())
            .await;
        assert!(matches!(
            result,
            Err(SchedulerError::InvalidCronExpression(_))
        ));
        assert!(scheduler.stats().is_empty());
    }

    #[tokio::test]
    async fn every_second_task_fires() {
        let scheduler = TaskScheduler::new().await.unwrap();
        scheduler
            .add_task("tick", "* * * * * *", noop_task())
            .await
            .unwrap();
        scheduler.start().await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(2100)).await;
        scheduler.shutdown().await.unwrap();

        let stats = scheduler.stats();
        assert!(stats[0].success_count >= 1);
    }
}
