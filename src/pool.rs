use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};

/// Worker limit for product page fetches.
pub const CONCURRENCY: usize = 7;

/// Fan out `job` over every URL with at most `limit` in flight, fan results
/// back in over a channel. Results arrive in completion order.
///
/// Tasks are independent: a job that fails or panics only loses its own
/// slot in the output, siblings keep running. The sender is dropped here so
/// the receive loop ends once every spawned task has finished.
pub async fn run<F, Fut, T>(urls: Vec<String>, limit: usize, job: F) -> Vec<(String, T)>
where
    F: Fn(String) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit));
    let (tx, mut rx) = mpsc::channel::<(String, T)>(limit * 2);

    for url in urls {
        let sem = Arc::clone(&semaphore);
        let tx = tx.clone();
        let job = job.clone();

        tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let result = job(url.clone()).await;
            let _ = tx.send((url, result)).await;
        });
    }

    drop(tx);

    let mut results = Vec::new();
    while let Some(item) = rx.recv().await {
        results.push(item);
    }
    results
}

// ── Tests ──
