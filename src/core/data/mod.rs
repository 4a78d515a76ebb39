pub mod complex;
pub mod screen_point;
pub mod viewport_extent;
