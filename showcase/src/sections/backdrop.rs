use leptos::prelude::*;

const DOT_COUNT: usize = 20;
const GOLDEN: f64 = 0.618_033_988_75;

/// Evenly scattered positions in percent, stable across renders.
fn dot_positions() -> impl Iterator<Item = (f64, f64, f64)> {
    (0..DOT_COUNT).map(|i| {
        let n = i as f64;
        let left = (n * GOLDEN).fract() * 100.0;
        let top = ((n + 0.5) / DOT_COUNT as f64) * 100.0;
        let delay = (n * GOLDEN * 3.0).fract() * 3.0;
        (left, top, delay)
    })
}

#[component]
pub fn BackgroundBlobs() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="blob blob-primary"></div>
            <div class="blob blob-secondary"></div>
            <div class="blob blob-accent"></div>
            {dot_positions()
                .map(|(left, top, delay)| {
                    view! {
                        <span
                            class="dot"
                            style=format!("left: {left:.2}%; top: {top:.2}%; animation-delay: {delay:.2}s")
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_stay_on_screen() {
        let dots: Vec<_> = dot_positions().collect();
        assert_eq!(dots.len(), DOT_COUNT);
        assert!(dots.iter().all(|&(l, t, d)| (0.0..100.0).contains(&l)
            && (0.0..100.0).contains(&t)
            && (0.0..3.0).contains(&d)));
    }
}
