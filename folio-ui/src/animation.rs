//! `requestAnimationFrame` loop bound to the reactive owner.
//!
//! The loop is started from inside a component or effect. Its pending frame
//! is cancelled when that owner is cleaned up, so unmounted canvases stop
//! drawing immediately.

use crate::browser::now_ms;
use folio_core::timer::TimerSlot;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Length of one frame at 60 Hz, in ms.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Handle to a running loop.
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    pending: StoredValue<TimerSlot<AnimationFrameRequestHandle>>,
}

impl FrameLoop {
    /// Call `tick(frames)` on every animation frame, where `frames` is the
    /// elapsed time in 60 Hz frames. The loop ends when `tick` returns
    /// `false`, when [`FrameLoop::stop`] is called, or on owner cleanup.
    pub fn start<F>(tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending = StoredValue::new(TimerSlot::default());
        let this = Self { pending };
        request(this, Rc::new(RefCell::new(tick)), None);
        on_cleanup(move || this.stop());
        this
    }

    pub fn stop(&self) {
        if let Some(Some(handle)) = self.pending.try_update_value(|slot| slot.dispose()) {
            handle.cancel();
        }
    }
}

fn request<F>(this: FrameLoop, tick: Rc<RefCell<F>>, last: Option<f64>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let scheduled = request_animation_frame_with_handle(move || {
        if !this.pending.try_update_value(|slot| slot.fire()).unwrap_or(false) {
            return;
        }
        let now = now_ms();
        let frames = last.map_or(1.0, |last| (now - last) / FRAME_MS);
        let keep_going = (tick.borrow_mut())(frames);
        if keep_going {
            request(this, tick, Some(now));
        }
    });

    match scheduled {
        Ok(handle) => match this.pending.try_update_value(|slot| slot.arm(handle)) {
            Some(None) => {}
            Some(Some(stale)) => stale.cancel(),
            None => handle.cancel(),
        },
        Err(err) => tracing::warn!(?err, "requestAnimationFrame unavailable"),
    }
}
