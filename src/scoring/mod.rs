pub mod reveal;
pub mod review;
pub mod stats;

pub use reveal::{option_marks, OptionMark};
pub use review::{build_review, full_review, FullReview, ReviewItem, ReviewScope, ReviewStatus};
pub use stats::{compute_stats, Stats};
