extern crate nalgebra as na;
#[macro_use]
extern crate approx;

mod aabb_merge;
mod aabb_tree_brute_force;
mod collection_broad_phase;
mod degenerate_sentinels;
mod dispatcher_result_types;
mod line_plane_crossing;
mod linear_circle_tangency;
mod plane_scenarios;
mod relation_symmetry;
mod segment_overlap;
