use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tokio::task::JoinSet;

use crate::archive::RecordSink;
use crate::config::RunConfig;
use crate::domain::Person;
use crate::error::ArchiveError;
use crate::flatten::flatten_person;
use crate::swapi::SwapiClient;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub chunks: usize,
    pub fetched: usize,
    pub missing: usize,
    pub archived: usize,
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
    pub elapsed: Option<Duration>,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

pub struct App<C, S> {
    client: Arc<C>,
    sink: Arc<S>,
}

impl<C, S> App<C, S>
where
    C: SwapiClient + 'static,
    S: RecordSink + 'static,
{
    pub fn new(client: C, sink: S) -> Self {
        Self {
            client: Arc::new(client),
            sink: Arc::new(sink),
        }
    }

    /// Runs the whole batch. Each chunk's flatten-and-insert is spawned as
    /// a background task, so the next chunk's fetch starts without waiting
    /// for the previous chunk's persistence; the run does not return until
    /// every spawned task has finished.
    pub async fn run(
        &self,
        config: &RunConfig,
        progress: &dyn ProgressSink,
    ) -> Result<RunSummary, ArchiveError> {
        self.sink.init_schema().await?;

        let chunks = config.chunks();
        let mut summary = RunSummary {
            chunks: chunks.len(),
            fetched: 0,
            missing: 0,
            archived: 0,
        };
        let mut pending: JoinSet<Result<usize, ArchiveError>> = JoinSet::new();

        for chunk in &chunks {
            // One fetch per id, results in id order; absent people keep
            // their slot as None until filtered below.
            let people =
                try_join_all(chunk.iter().map(|id| self.client.fetch_person(*id))).await?;
            let present: Vec<Person> = people.into_iter().flatten().collect();
            let missing = chunk.len() - present.len();
            summary.fetched += present.len();
            summary.missing += missing;

            if let (Some(first), Some(last)) = (chunk.first(), chunk.last()) {
                progress.event(ProgressEvent {
                    message: format!(
                        "chunk {first}..={last}: fetched {}, missing {missing}",
                        present.len()
                    ),
                    elapsed: None,
                });
            }

            let client = Arc::clone(&self.client);
            let sink = Arc::clone(&self.sink);
            pending.spawn(async move {
                let mut records = Vec::with_capacity(present.len());
                for person in present {
                    records.push(flatten_person(client.as_ref(), person).await?);
                }
                sink.insert_all(&records).await?;
                Ok(records.len())
            });
        }

        // Join barrier: a later chunk may commit before an earlier one, but
        // nothing is dropped on exit.
        while let Some(joined) = pending.join_next().await {
            let archived = joined.map_err(|err| ArchiveError::TaskJoin(err.to_string()))??;
            summary.archived += archived;
        }

        Ok(summary)
    }
}
