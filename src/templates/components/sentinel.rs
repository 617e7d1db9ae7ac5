use maud::{html, Markup};

/// Trailing marker that fetches the next window when scrolled near.
///
/// `intersect once` fires a single request per sentinel; the response replaces
/// the sentinel (cards plus, if more remain, a fresh sentinel). Shifting it up
/// by `lookahead_px` makes it intersect that far before the grid's end is on screen.
pub fn sentinel(more_url: &str, lookahead_px: u32) -> Markup {
    html! {
        div class="scroll-sentinel"
            aria-hidden="true"
            style=(format!("position: relative; top: -{lookahead_px}px; height: 1px;"))
            hx-get=(more_url)
            hx-trigger="intersect once"
            hx-swap="outerHTML"
        {}
    }
}

/// "Showing N of M". Re-sent out-of-band with every window so the count stays current.
pub fn result_count(shown: usize, total: usize, out_of_band: bool) -> Markup {
    html! {
        p id="result-count" class="result-count" hx-swap-oob=[out_of_band.then_some("true")] {
            @if total == 0 {
                "No results"
            } @else {
                "Showing " (shown) " of " (total)
            }
        }
    }
}
