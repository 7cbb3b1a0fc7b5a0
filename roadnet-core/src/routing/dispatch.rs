use log::debug;
use rayon::prelude::*;

use crate::{Error, NodeId};

/// Runs `search` for every origin on a pool of `workers` threads.
///
/// Origins are split into contiguous chunks, one per worker, and results
/// come back in origin order. Searches share nothing but the captured
/// read-only state.
pub(crate) fn dispatch<T, F>(origins: &[NodeId], workers: usize, search: F) -> Result<Vec<T>, Error>
where
    T: Send,
    F: Fn(NodeId) -> T + Sync,
{
    if workers == 0 {
        return Err(Error::InvalidData(
            "At least one worker thread is required".to_string(),
        ));
    }
    if origins.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    let chunk_size = origins.len().div_ceil(workers);
    debug!(
        "Dispatching {} origins over {workers} workers in chunks of {chunk_size}",
        origins.len()
    );

    let chunks: Vec<Vec<T>> = pool.install(|| {
        origins
            .par_chunks(chunk_size)
            .map(|chunk| chunk.iter().map(|&origin| search(origin)).collect())
            .collect()
    });

    Ok(chunks.into_iter().flatten().collect())
}
