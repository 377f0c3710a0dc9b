//! Exact intersections between entities.

pub use self::intersection::{intersection, intersects};
pub use self::intersection_aabb_aabb::intersection_aabb_aabb;
pub use self::intersection_collinear::{
    collinear_intersection_line_line, collinear_intersection_line_ray,
    collinear_intersection_line_segment, collinear_intersection_ray_ray,
    collinear_intersection_ray_segment, collinear_intersection_segment_segment,
};
pub use self::intersection_coplanar::{
    coplanar_intersection_line_triangle, coplanar_intersection_ray_triangle,
    coplanar_intersection_segment_triangle,
};
pub use self::intersection_line_line::{coplanar_intersection_linear_linear, intersection_line_line};
pub use self::intersection_linear_circle::{
    coplanar_intersection_line_circle, coplanar_intersection_ray_circle,
    coplanar_intersection_segment_circle, intersection_line_circle, intersection_ray_circle,
    intersection_segment_circle,
};
pub use self::intersection_linear_plane::{
    intersection_line_plane, intersection_ray_plane, intersection_segment_plane,
};
pub use self::intersection_linear_sphere::{
    intersection_line_sphere, intersection_ray_sphere, intersection_segment_sphere,
};
pub use self::intersection_linear_triangle::{
    intersection_line_triangle, intersection_ray_triangle, intersection_segment_triangle,
};
pub use self::intersection_planar_planar::{
    intersection_circle_circle, intersection_plane_circle, intersection_plane_sphere,
    intersection_plane_triangle, intersection_triangle_circle,
};
pub use self::intersection_plane_plane::{
    intersection_plane_plane, intersection_plane_plane_plane,
};
pub use self::intersection_punctual::{
    intersection_point_aabb, intersection_point_circle, intersection_point_line,
    intersection_point_plane, intersection_point_point, intersection_point_ray,
    intersection_point_segment, intersection_point_sphere, intersection_point_triangle,
};

mod intersection;
mod intersection_aabb_aabb;
mod intersection_collinear;
mod intersection_coplanar;
mod intersection_line_line;
mod intersection_linear_circle;
mod intersection_linear_plane;
mod intersection_linear_sphere;
mod intersection_linear_triangle;
mod intersection_planar_planar;
mod intersection_plane_plane;
mod intersection_punctual;
