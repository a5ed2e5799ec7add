pub mod formatter;

pub use formatter::{
    format_full_review, format_quick_review, format_stats, should_use_colors,
};
