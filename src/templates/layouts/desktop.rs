use crate::domain::region::REGIONS;
use crate::pipeline::Selection;
use crate::section::Section;
use maud::{html, Markup, DOCTYPE};

/// Pinned htmx build; the sentinels depend on its `intersect` trigger.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";

/// Page shell: head, top nav with the three sections and the global region selector.
///
/// `region` is the global (cookie) region; `current_path` is where the selector
/// sends the user back to.
pub fn desktop_layout(
    title: &str,
    region: &Selection,
    current_path: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · YuhPlace" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) crossorigin="anonymous" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "YuhPlace" }
                    nav {
                        ul {
                            @for section in Section::ALL {
                                li {
                                    @let current = current_path.starts_with(section.path());
                                    a href=(section.path())
                                        aria-current=[current.then_some("page")]
                                    {
                                        (section.title())
                                    }
                                }
                            }
                        }
                    }

                    form method="get" action="/region" class="region-picker" {
                        input type="hidden" name="next" value=(current_path);
                        label for="global-region" class="sr-only" { "Region" }
                        select name="slug" id="global-region" onchange="this.form.submit()" {
                            option value="all" selected[region.is("all")] { "All regions" }
                            @for (slug, name) in REGIONS {
                                option value=(slug) selected[region.is(slug)] { (name) }
                            }
                        }
                        noscript { button type="submit" { "Go" } }
                    }
                }
                (content)
            }
        }
    }
}
