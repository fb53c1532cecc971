//! List of a user's reviews on the profile page.

#[cfg(test)]
#[path = "review_list_test.rs"]
mod review_list_test;

use leptos::prelude::*;
use session::Review;

/// One-line summary: author, rating when known, then the review text.
pub fn review_summary(review: &Review) -> String {
    let mut line = review.username.clone();
    if !review.rating.is_empty() {
        line.push_str(&format!(" rated {}", review.rating));
    }
    if !review.review.is_empty() {
        line.push_str(": ");
        line.push_str(&review.review);
    }
    line
}

#[component]
pub fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="review-list__empty">"No reviews yet."</p> }.into_any();
    }
    view! {
        <ul class="review-list">
            {reviews
                .iter()
                .map(|review| {
                    let book = review.book_id.clone();
                    view! {
                        <li class="review-list__item" data-book=book>
                            {review_summary(review)}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
