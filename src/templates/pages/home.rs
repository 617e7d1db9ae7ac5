// templates/pages/home.rs

use crate::pipeline::Selection;
use crate::section::Section;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(global_region: &Selection) -> Markup {
    desktop_layout(
        "Home",
        global_region,
        "/",
        html! {
            main class="container" {
                h1 { "Welcome to YuhPlace" }
                p { "Community updates, marketplace and property listings from across Guyana." }

                div class="section-links" {
                    @for section in Section::ALL {
                        a class="card" href=(section.path()) {
                            h2 { (section.title()) }
                            p { (section.blurb()) }
                        }
                    }
                }
            }
        },
    )
}
