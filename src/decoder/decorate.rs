//! Concurrent decoration of a parsed trace forest.
//!
//! Every call-shaped node is decoded in its own task. Tasks share nothing but
//! the decoder handle and a semaphore capping requests in flight; each returns
//! its node id and display text, and the new forest is assembled once all of
//! them have settled.

use super::call_line::CallLine;
use super::format::format_call;
use super::CalldataDecoder;
use crate::parser::{NodeId, TraceForest, TraceTree};
use crate::utils::config::DEFAULT_MAX_IN_FLIGHT;
use crate::utils::error::{DecodeError, DecorateError};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Decorates trace forests through a [`CalldataDecoder`]
pub struct NodeDecoder<D> {
    decoder: Arc<D>,
    max_in_flight: usize,
}

impl<D: CalldataDecoder> NodeDecoder<D> {
    pub fn new(decoder: D) -> Self {
        Self {
            decoder: Arc::new(decoder),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Cap concurrent decode requests (minimum 1)
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Decode one node's content, falling back to it on any failure
    pub async fn decode_content(&self, content: &str) -> String {
        decode_content(self.decoder.as_ref(), content).await
    }

    /// Produce a new forest with every decodable call line rewritten
    ///
    /// The input forest is left as parsed.
    ///
    /// # Errors
    /// * `DecorateError::TaskFailed` - a decode task panicked or was cancelled
    pub async fn decorate(&self, forest: &TraceForest) -> Result<TraceForest, DecorateError> {
        let mut decoded = self.decode_nodes(forest, forest.ids()).await?;

        Ok(forest.map_content(|id, node| {
            decoded
                .remove(&id)
                .unwrap_or_else(|| node.content.clone())
        }))
    }

    /// Decorate a single tree rooted at `root`
    pub async fn decorate_tree(
        &self,
        forest: &TraceForest,
        root: NodeId,
    ) -> Result<TraceTree, DecorateError> {
        let decoded = self.decode_nodes(forest, forest.iter_preorder(root)).await?;
        Ok(rebuild_tree(forest, root, &decoded))
    }

    async fn decode_nodes(
        &self,
        forest: &TraceForest,
        ids: impl Iterator<Item = NodeId>,
    ) -> Result<HashMap<NodeId, String>, DecorateError> {
        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let mut tasks = JoinSet::new();

        for id in ids {
            let content = &forest.node(id).content;
            // Non-call lines pass through without a task
            if CallLine::parse(content).is_err() {
                continue;
            }

            let content = content.clone();
            let decoder = Arc::clone(&self.decoder);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| DecorateError::SchedulerClosed)?;
                let decoded = decode_content(decoder.as_ref(), &content).await;
                Ok::<_, DecorateError>((id, decoded))
            });
        }

        info!("Decoding {} call lines", tasks.len());

        let mut decoded = HashMap::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let (id, content) = joined??;
            decoded.insert(id, content);
        }

        Ok(decoded)
    }
}

impl<D> Clone for NodeDecoder<D> {
    fn clone(&self) -> Self {
        Self {
            decoder: Arc::clone(&self.decoder),
            max_in_flight: self.max_in_flight,
        }
    }
}

/// Decode a call line, or return it unchanged
///
/// **Public** - per-node decode step, never fails
pub async fn decode_content<D: CalldataDecoder>(decoder: &D, content: &str) -> String {
    match try_decode_content(decoder, content).await {
        Ok(decoded) => decoded,
        Err(DecodeError::NotACall(_)) | Err(DecodeError::InvalidSelector(_)) => content.to_string(),
        Err(e) => {
            warn!("Error decoding node content: {}", e);
            content.to_string()
        }
    }
}

async fn try_decode_content<D: CalldataDecoder>(
    decoder: &D,
    content: &str,
) -> Result<String, DecodeError> {
    let call = CallLine::parse(content)?;
    let decoded = decoder.decode(&call.calldata()).await?;
    debug!("Decoded {} as {}", call.selector, decoded.function_name);
    Ok(call.with_call(&format_call(&decoded)))
}

fn rebuild_tree(forest: &TraceForest, id: NodeId, decoded: &HashMap<NodeId, String>) -> TraceTree {
    let node = forest.node(id);
    TraceTree {
        content: decoded.get(&id).unwrap_or(&node.content).clone(),
        depth: node.depth,
        children: node
            .children
            .iter()
            .map(|&child| rebuild_tree(forest, child, decoded))
            .collect(),
    }
}
