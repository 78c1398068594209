//! Purely presentational progress indicator for an outstanding review.
//!
//! The bar is simulated: the service gives no intermediate feedback, so the
//! fill rises quickly at first and decays toward a 90% cap until the request
//! resolves and this component unmounts.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const TICK_MS: u32 = 500;

/// Next simulated percentage: `max(1, (90 - p) / 10)` per tick, capped at 90.
pub fn next_progress(current: f64) -> f64 {
    if current >= 90.0 {
        return current;
    }
    let increment = ((90.0 - current) / 10.0).max(1.0);
    (current + increment).min(90.0)
}

#[component]
pub fn ReviewProgress(message: String) -> Element {
    let mut percent = use_signal(|| 0.0f64);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(TICK_MS).await;
            percent.set(next_progress(percent()));
        }
    });

    let shown = percent().round() as u32;
    let fill = format!("width: {shown}%;");

    rsx! {
        div { class: "progress",
            div { class: "progress-mascot", "🐨" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "{fill}" }
            }
            p { class: "progress-percent", "{shown}%" }
            p { class: "progress-message", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rises_fast_at_the_start() {
        assert_eq!(next_progress(0.0), 9.0);
    }

    #[test]
    fn never_increments_by_less_than_one() {
        assert_eq!(next_progress(85.0), 86.0);
    }

    #[test]
    fn caps_at_ninety() {
        assert_eq!(next_progress(89.5), 90.0);
        assert_eq!(next_progress(90.0), 90.0);
    }
}
