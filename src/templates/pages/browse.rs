// templates/pages/browse.rs

use crate::pipeline::{BrowseView, FilterState, Selection};
use crate::section::Section;
use crate::templates::components::{filter_form, result_count, sentinel, RenderCard};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct BrowseVm<'a, R> {
    pub section: Section,
    pub state: &'a FilterState,
    pub view: &'a BrowseView<R>,
    /// Region from the global selector, for the nav.
    pub global_region: &'a Selection,
    pub lookahead_px: u32,
}

/// Cards followed by the sentinel for the next window, if any.
fn cards_and_sentinel<R: RenderCard>(vm: &BrowseVm<'_, R>) -> Markup {
    html! {
        @for item in &vm.view.items {
            (item.render_card())
        }
        @if vm.view.has_more {
            (sentinel(&vm.section.more_url(vm.state, vm.view.shown), vm.lookahead_px))
        }
    }
}

/// Full browse page with filters and the first window.
pub fn browse_page<R: RenderCard>(vm: &BrowseVm<'_, R>) -> Markup {
    desktop_layout(
        vm.section.title(),
        vm.global_region,
        vm.section.path(),
        html! {
            main class="container" {
                h1 { (vm.section.title()) }
                p class="blurb" { (vm.section.blurb()) }

                (filter_form(vm.section, vm.state))
                (result_count(vm.view.shown, vm.view.total, false))

                @if vm.view.total == 0 {
                    section class="empty-state" {
                        p { "Nothing matches these filters yet." }
                        a href=(format!("{}?region=all", vm.section.path())) { "Clear filters" }
                    }
                } @else {
                    section class="card-grid" id="results" {
                        (cards_and_sentinel(vm))
                    }
                }
            }
        },
    )
}

/// Response to a sentinel request: the next cards, a new sentinel, and the
/// updated count (out of band).
pub fn more_fragment<R: RenderCard>(vm: &BrowseVm<'_, R>) -> Markup {
    html! {
        (cards_and_sentinel(vm))
        (result_count(vm.view.shown, vm.view.total, true))
    }
}
