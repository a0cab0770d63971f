mod point;
mod transform;

pub use point::Point;
pub use transform::{
    distance, from_polar, mirror_across_vertical_axis, rotate_around, sector_angle, to_polar,
};
