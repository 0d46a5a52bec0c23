mod classify;
mod color;
mod feature;

pub use classify::{change_color, classify, ChangeBucket};
pub use color::Rgb;
pub use feature::{county_style, FeatureStyle};
