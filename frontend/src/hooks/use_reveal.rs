use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{DayStatus, RevealPhase, RevealSession, REVEAL_DELAY_MS};

use crate::services::logging::Logger;

/// Result from the reveal hook: the phase to render and the tap handler
/// for the mystery box.
pub struct UseRevealResult {
    pub phase: RevealPhase,
    pub on_open_box: Callback<MouseEvent>,
}

/// Drives the reveal interaction for one open day-detail view.
///
/// The hook owns the [`RevealSession`] for the view's lifetime. Tapping
/// the box moves it to `Revealing` (repeat taps are no-ops, guarded inside
/// the session rather than in render state so a double tap in one frame
/// still fires once) and schedules the `Revealed` transition after
/// [`REVEAL_DELAY_MS`].
///
/// The pending timer is tied to an epoch counter that is bumped when the
/// view unmounts, so closing the view while the timer is pending
/// guarantees the callback never mutates a torn-down view.
#[hook]
pub fn use_reveal(day: u32, status: DayStatus) -> UseRevealResult {
    // Source of truth for transitions. The use_state mirror below exists
    // only to trigger re-renders.
    let session = use_mut_ref(move || RevealSession::open(status));
    let phase = use_state({
        let session = session.clone();
        move || {
            session
                .borrow()
                .as_ref()
                .map(|s| s.phase())
                .unwrap_or(RevealPhase::Unopened)
        }
    });

    // Epoch guard for the scheduled transition: a timer only lands if the
    // epoch it captured is still current.
    let epoch = use_mut_ref(|| 0u32);

    {
        let epoch = epoch.clone();
        use_effect_with((), move |_| {
            move || {
                // View closed: any pending reveal timer is now dead.
                *epoch.borrow_mut() += 1;
            }
        });
    }

    let on_open_box = {
        let session = session.clone();
        let phase = phase.clone();
        let epoch = epoch.clone();
        Callback::from(move |_: MouseEvent| {
            let fired = session
                .borrow_mut()
                .as_mut()
                .map(|s| s.begin_reveal())
                .unwrap_or(false);
            if !fired {
                return;
            }
            phase.set(RevealPhase::Revealing);
            Logger::debug_with_component("reveal", &format!("day {}: box opened", day));

            let session = session.clone();
            let phase = phase.clone();
            let epoch = epoch.clone();
            let scheduled_epoch = *epoch.borrow();
            spawn_local(async move {
                TimeoutFuture::new(REVEAL_DELAY_MS).await;
                if *epoch.borrow() != scheduled_epoch {
                    Logger::debug_with_component(
                        "reveal",
                        &format!("day {}: reveal timer cancelled by close", day),
                    );
                    return;
                }
                let finished = session
                    .borrow_mut()
                    .as_mut()
                    .map(|s| s.finish_reveal())
                    .unwrap_or(false);
                if finished {
                    phase.set(RevealPhase::Revealed);
                }
            });
        })
    };

    UseRevealResult {
        phase: *phase,
        on_open_box,
    }
}
