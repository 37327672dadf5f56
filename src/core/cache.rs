//! Lazily loaded model handles.
//!
//! Loading a model and its tokenizer is expensive, so it is deferred until the
//! first request that needs it. A [`LazyModel`] runs its loader at most once:
//! concurrent first callers block until that single load finishes, and the
//! outcome (success or failure) is kept for the lifetime of the handle.

use crate::core::{AnalyzerError, Result};
use once_cell::sync::OnceCell;

type Loader<M> = Box<dyn Fn() -> Result<M> + Send + Sync>;

/// A once-initialized model slot.
///
/// `M` is expected to be a cheap handle (typically an `Arc`) so that every
/// caller receives a clone sharing the same underlying weights.
pub struct LazyModel<M> {
    slot: OnceCell<std::result::Result<M, String>>,
    loader: Loader<M>,
}

impl<M> LazyModel<M>
where
    M: Clone + Send + Sync,
{
    /// Create a handle that will call `loader` on first use.
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<M> + Send + Sync + 'static,
    {
        Self {
            slot: OnceCell::new(),
            loader: Box::new(loader),
        }
    }

    /// Get the model, loading it if this is the first access.
    ///
    /// A failed load is not retried: every later call reports the original
    /// failure as [`AnalyzerError::ModelUnavailable`].
    pub fn get(&self) -> Result<M> {
        let outcome = self.slot.get_or_init(|| {
            tracing::info!("loading sentiment model");
            match (self.loader)() {
                Ok(model) => {
                    tracing::info!("sentiment model ready");
                    Ok(model)
                }
                Err(e) => {
                    tracing::error!(error = %e, "sentiment model failed to load");
                    Err(e.to_string())
                }
            }
        });

        match outcome {
            Ok(model) => Ok(model.clone()),
            Err(message) => Err(AnalyzerError::ModelUnavailable(message.clone())),
        }
    }

    /// Whether a load has been attempted and succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.slot.get(), Some(Ok(_)))
    }
}
