//! Snackbar rendering transient notices from [`NotifyState`].

use leptos::prelude::*;

use crate::state::notify::NotifyState;

/// Auto-dismiss delay, matching the original snackbar behavior.
#[cfg(feature = "csr")]
const DISMISS_MS: u32 = 6_000;

/// Bottom-right snackbar. Notices dismiss on click or after a delay;
/// a newer notice cancels the older notice's timer.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    // Auto-dismiss: stale timers detect a newer notice via `seq`.
    Effect::new(move || {
        let state = notify.get();
        if state.current.is_none() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let seq = state.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
                notify.update(|n| {
                    if n.seq == seq {
                        n.clear();
                    }
                });
            });
        }
    });

    view! {
        <Show when=move || notify.get().current.is_some()>
            {move || {
                notify
                    .get()
                    .current
                    .map(|notice| {
                        let class = format!("snackbar snackbar--{}", notice.severity.as_str());
                        view! {
                            <div class=class on:click=move |_| notify.update(NotifyState::clear)>
                                {notice.message.clone()}
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
