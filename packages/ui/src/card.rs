//! Destination card shared by the destinations and recommendations grids.

use api::WishlistToggle;
use dioxus::prelude::*;
use store::{split_tags, Destination};

use crate::icons::{FaCalendar, FaLocationDot, FaMountain};
use crate::wishlist_button::WishlistButton;
use crate::Icon;

/// Badge class for the pinned match-score scale (a count of matched
/// preferences): 3+ strong, 2 moderate, below that weak.
fn score_class(score: i32) -> &'static str {
    if score >= 3 {
        "score-badge score-strong"
    } else if score >= 2 {
        "score-badge score-moderate"
    } else {
        "score-badge score-weak"
    }
}

#[component]
pub fn DestinationCard(
    destination: Destination,
    #[props(default)] rank: Option<usize>,
    #[props(default)] match_score: Option<i32>,
    #[props(default)] on_wishlist_change: EventHandler<WishlistToggle>,
    #[props(default)] on_auth_required: EventHandler<()>,
) -> Element {
    let tags = split_tags(&destination.tags);
    let extra_tags = tags.len().saturating_sub(3);

    rsx! {
        div {
            class: "destination-card",

            if let Some(rank) = rank {
                div { class: "rank-badge", "#{rank}" }
            }

            div {
                class: "card-actions",
                WishlistButton {
                    destination_id: destination.id,
                    on_toggled: on_wishlist_change,
                    on_auth_required: on_auth_required,
                }
            }

            if let Some(score) = match_score {
                div { class: score_class(score), "Match {score}" }
            }

            div {
                class: "card-image",
                if let Some(ref url) = destination.image_url {
                    img { src: "{url}", alt: "{destination.name}" }
                } else {
                    div {
                        class: "card-image-placeholder",
                        Icon { icon: FaMountain, width: 48, height: 48 }
                    }
                }
            }

            div {
                class: "card-body",
                div {
                    class: "card-header",
                    div {
                        h3 { "{destination.name}" }
                        if !destination.place.is_empty() {
                            div {
                                class: "card-place",
                                Icon { icon: FaLocationDot, width: 14, height: 14 }
                                span { "{destination.place}" }
                            }
                        }
                    }
                    div {
                        class: "card-cost",
                        "{destination.average_cost} NPR"
                    }
                }

                if !destination.description.is_empty() {
                    p { class: "card-description", "{destination.description}" }
                }

                if !destination.best_season.is_empty() {
                    div {
                        class: "card-season",
                        Icon { icon: FaCalendar, width: 14, height: 14 }
                        span { "Best in {destination.best_season}" }
                    }
                }

                if !tags.is_empty() {
                    div {
                        class: "card-tags",
                        for tag in tags.iter().take(3) {
                            span { key: "{tag}", class: "tag-chip", "{tag}" }
                        }
                        if extra_tags > 0 {
                            span { class: "tag-chip tag-more", "+{extra_tags} more" }
                        }
                    }
                }
            }
        }
    }
}
