use crate::domain::catalog::LISTING_TYPES;
use crate::domain::region::REGIONS;
use crate::pipeline::{FilterState, SortKey};
use crate::section::Section;
use maud::{html, Markup};

/// Page-level filters. Submits a plain GET back to the section page, so every
/// change starts a fresh reveal window.
pub fn filter_form(section: Section, state: &FilterState) -> Markup {
    let schema = section.schema();

    html! {
        form method="get" action=(section.path()) class="filters" id="filters" {
            label {
                span class="sr-only" { "Search" }
                input type="search" name="q" value=(state.query)
                    placeholder=(format!("Search {}", section.title().to_lowercase()));
            }

            label {
                span { (section.category_label()) }
                select name="category" onchange="this.form.submit()" {
                    option value="all" selected[state.category.is("all")] { "All" }
                    @for (slug, label) in schema.categories {
                        option value=(slug) selected[state.category.is(slug)] { (label) }
                    }
                }
            }

            label {
                span { "Region" }
                select name="region" onchange="this.form.submit()" {
                    option value="all" selected[state.region.is("all")] { "All regions" }
                    @for (slug, name) in REGIONS {
                        option value=(slug) selected[state.region.is(slug)] { (name) }
                    }
                }
            }

            @if schema.listing_types {
                label {
                    span { "Listing" }
                    select name="listing_type" onchange="this.form.submit()" {
                        option value="all" selected[state.listing_type.is("all")] { "Sale or rent" }
                        @for (slug, label) in LISTING_TYPES {
                            option value=(slug) selected[state.listing_type.is(slug)] { (label) }
                        }
                    }
                }
            }

            @if schema.price_range {
                label {
                    span { "Min price" }
                    input type="number" name="min_price" min="0" step="1000"
                        value=[state.price.min];
                }
                label {
                    span { "Max price" }
                    input type="number" name="max_price" min="0" step="1000"
                        value=[state.price.max];
                }
            }

            @if section.sorts_by_price() {
                label {
                    span { "Sort" }
                    select name="sort" onchange="this.form.submit()" {
                        @for key in SortKey::ALL {
                            option value=(key.as_str()) selected[state.sort == key] {
                                (key.label())
                            }
                        }
                    }
                }
            }

            button type="submit" class="primary" { "Apply" }
            a href=(format!("{}?region=all", section.path())) class="reset" { "Clear" }
        }
    }
}
