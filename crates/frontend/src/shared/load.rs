use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::dashboards::feedback::api::FetchError;

/// What a panel knows about one of its datasets.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }
}

/// Writes a finished fetch into `target`. Returns false when the owning
/// panel is already gone and the result was dropped.
pub fn deliver<T>(target: RwSignal<LoadState<T>>, result: Result<T, FetchError>) -> bool
where
    T: Send + Sync + 'static,
{
    let next = match result {
        Ok(value) => LoadState::Ready(value),
        Err(e) => {
            log::error!("failed to load panel data: {}", e);
            LoadState::Failed(e.to_string())
        }
    };
    let dropped = target.try_set(next).is_some();
    if dropped {
        log::debug!("panel disposed before its data arrived");
    }
    !dropped
}

/// Runs `fetch` on the local executor and delivers it into `target`.
pub fn spawn_load<T, F>(target: RwSignal<LoadState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, FetchError>> + 'static,
{
    spawn_local(async move {
        let result = fetch.await;
        deliver(target, result);
    });
}
