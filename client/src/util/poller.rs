//! Generation status poller.
//!
//! One task per poll run. The run's epoch lives in `GenerationState`; the task
//! exits as soon as its epoch is no longer current, the page's signal has been
//! disposed, or a result finishes the run.

use leptos::prelude::*;

use crate::state::generation::GenerationState;

/// Delay between status requests.
pub const POLL_INTERVAL_MS: u64 = 2000;

/// Poll `GET /models/status/{model_id}` for the run `epoch` until it ends.
pub fn spawn(generation: RwSignal<GenerationState>, token: String, model_id: String, epoch: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::generation::PollOutcome;

        log::debug!("poller: start model={model_id} epoch={epoch}");
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
            if generation.try_with_untracked(|state| state.is_current(epoch)) != Some(true) {
                break;
            }
            let result = crate::net::api::fetch_model_status(&token, &model_id).await;
            let outcome = generation.try_update(|state| match result {
                Ok(response) => state.apply_status(epoch, response),
                Err(message) => {
                    log::warn!("poller: status request failed for {model_id}: {message}");
                    state.fail(epoch, message)
                }
            });
            if outcome != Some(PollOutcome::Continue) {
                break;
            }
        }
        log::debug!("poller: stop model={model_id} epoch={epoch}");
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generation, token, model_id, epoch);
    }
}
