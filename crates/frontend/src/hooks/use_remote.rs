//! Fetch-on-mount hook for catalog data

use std::future::Future;
use yew::prelude::*;

/// Where a fetch stands
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Run `fetch` whenever `deps` changes and track its result
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, fetch: F) -> UseStateHandle<Remote<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| Remote::Loading);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            state.set(Remote::Loading);
            let pending = fetch(deps.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match pending.await {
                    Ok(value) => state.set(Remote::Loaded(value)),
                    Err(message) => {
                        tracing::warn!(%message, "fetch failed");
                        state.set(Remote::Failed(message));
                    }
                }
            });
        });
    }

    state
}
