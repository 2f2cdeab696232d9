pub mod controller;
pub mod hooks;
pub mod strategy;

pub use hooks::{use_center_carousel, use_intersection_carousel, CarouselDots};
