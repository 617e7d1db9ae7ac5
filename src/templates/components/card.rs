use crate::domain::catalog::{label_for, MARKET_CATEGORIES, POST_TYPES, PROPERTY_TYPES};
use crate::domain::{
    Condition, ContentRecord, DiscoverPost, ListingType, MarketListing, PropertyListing,
    Provenance,
};
use maud::{html, Markup};

/// A record that can be shown as a card in a browse grid.
pub trait RenderCard: ContentRecord {
    fn render_card(&self) -> Markup;
}

/// "$1,250,000 GYD", or the fallback text for unpriced listings.
pub fn format_price(price: Option<i64>, unpriced: &str) -> String {
    let Some(price) = price else {
        return unpriced.to_string();
    };

    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}${grouped} GYD")
}

fn label_or_slug<'a>(table: &[(&'static str, &'static str)], slug: &'a str) -> &'a str {
    label_for(table, slug).unwrap_or(slug)
}

fn posted(record: &impl ContentRecord) -> Markup {
    let at = record.created_at();
    html! {
        time datetime=(at.to_rfc3339()) { (at.format("%b %-d, %Y").to_string()) }
    }
}

fn card_meta(record: &impl ContentRecord) -> Markup {
    html! {
        p class="card-meta" {
            span class="region" { (record.region().name) }
            " · "
            (posted(record))
            @if record.provenance() == Provenance::Fallback {
                " · " span class="badge demo" { "Sample" }
            }
        }
    }
}

impl RenderCard for MarketListing {
    fn render_card(&self) -> Markup {
        html! {
            article class="card listing-card" id=(format!("market-{}", self.id)) {
                @if self.is_featured {
                    span class="badge featured" { "Featured" }
                }
                h3 { (self.title) }
                p class="price" { (format_price(self.price, "Contact for price")) }
                p class="tags" {
                    span { (label_or_slug(MARKET_CATEGORIES, &self.category)) }
                    @match self.condition {
                        Condition::New => span { "New" },
                        Condition::Used => span { "Used" },
                        Condition::NotApplicable => {},
                    }
                }
                (card_meta(self))
            }
        }
    }
}

impl RenderCard for PropertyListing {
    fn render_card(&self) -> Markup {
        let unpriced = match self.listing_type {
            ListingType::Sale => "Price on request",
            ListingType::Rent => "Rent on request",
        };
        html! {
            article class="card property-card" id=(format!("property-{}", self.id)) {
                @if self.is_featured {
                    span class="badge featured" { "Featured" }
                }
                h3 { (self.title) }
                p class="price" {
                    (format_price(self.price, unpriced))
                    @if self.listing_type == ListingType::Rent && self.price.is_some() {
                        " / month"
                    }
                }
                p class="tags" {
                    span { (label_or_slug(PROPERTY_TYPES, &self.property_type)) }
                    span {
                        @match self.listing_type {
                            ListingType::Sale => "For sale",
                            ListingType::Rent => "For rent",
                        }
                    }
                    @if let Some(beds) = self.bedrooms {
                        span { (beds) " bed" }
                    }
                }
                @if let Some(n) = &self.neighborhood {
                    p class="neighborhood" { (n) }
                }
                (card_meta(self))
            }
        }
    }
}

impl RenderCard for DiscoverPost {
    fn render_card(&self) -> Markup {
        html! {
            article class="card post-card" id=(format!("post-{}", self.id)) {
                span class=(format!("badge post-type {}", self.post_type)) {
                    (label_or_slug(POST_TYPES, &self.post_type))
                }
                h3 { (self.title) }
                p { (self.description) }
                (card_meta(self))
            }
        }
    }
}
