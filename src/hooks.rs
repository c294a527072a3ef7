//! Reactive Hooks

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use catalog_core::Debouncer;

/// Follow `input`, but only after it has stayed unchanged for `delay_ms`.
///
/// Each change drops the pending timeout (which clears it) and starts a new
/// one. Teardown cancels whatever is still pending.
pub fn use_debounced<T>(input: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = input.get_untracked();
    let (output, set_output) = signal(initial.clone());
    let debouncer = StoredValue::new(Debouncer::new(initial));
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = input.get();
        let Some(ticket) = debouncer.try_update_value(|d| d.push(value)) else {
            return;
        };
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(Some(committed)) = debouncer.try_update_value(|d| d.fire(ticket)) {
                tracing::debug!("debounced value committed");
                set_output.set(committed);
            }
        });
        pending.set_value(Some(timeout));
    });

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
    });

    output
}
