use crate::math::{Point, Real};
use crate::query::details::*;
use crate::query::relation::{is_collinear, is_coplanar, ordered_pair};
use crate::query::QueryError;
use crate::shape::{AnyEntity, Entity, TypedEntity};

/// Computes the intersection between two entities.
///
/// The type of the result depends on the relative position of both entities,
/// e.g., two lines intersect on a point, on a whole line if they are
/// collinear, or not at all. `Ok(AnyEntity::None)` means that the entities do
/// not intersect.
///
/// The pair is first sorted by [`EntityType::rank`](crate::shape::EntityType::rank), so the
/// result does not depend on the argument order. Then:
///
/// 1. if either entity is `None`, the result is `None`;
/// 2. if either entity is a point, the result is that point if the other entity contains it;
/// 3. collinear entities are intersected as intervals of their common line;
/// 4. coplanar entities are intersected within their common plane;
/// 5. every other pair goes through the general algorithms.
///
/// Returns [`QueryError::Unsupported`] for pairs that are not implemented,
/// e.g., two triangles.
pub fn intersection(e1: &dyn Entity, e2: &dyn Entity, eps: Real) -> Result<AnyEntity, QueryError> {
    let (t1, t2) = ordered_pair(e1, e2);

    match t1 {
        TypedEntity::None => Ok(AnyEntity::None),
        TypedEntity::Point(p) => Ok(punctual_intersection(p, t2, eps).into()),
        _ if is_collinear(e1, e2, eps) => collinear_intersection(t1, t2, eps),
        _ if is_coplanar(e1, e2, eps) => coplanar_intersection(t1, t2, eps),
        _ => general_intersection(t1, t2, eps),
    }
}

/// Tests if two entities intersect.
///
/// This is `true` iff [`intersection`] returns something other than `AnyEntity::None`.
pub fn intersects(e1: &dyn Entity, e2: &dyn Entity, eps: Real) -> Result<bool, QueryError> {
    intersection(e1, e2, eps).map(|res| !matches!(res, AnyEntity::None))
}

fn unsupported(t1: TypedEntity<'_>, t2: TypedEntity<'_>) -> QueryError {
    let (first, second) = (t1.entity_type(), t2.entity_type());
    log::debug!("intersection not supported between {} and {}", first, second);
    QueryError::unsupported(first, second)
}

fn punctual_intersection(
    p: &Point<Real>,
    other: TypedEntity<'_>,
    eps: Real,
) -> Option<Point<Real>> {
    match other {
        TypedEntity::None => None,
        TypedEntity::Point(q) => intersection_point_point(p, q, eps),
        TypedEntity::Line(l) => intersection_point_line(p, l, eps),
        TypedEntity::Ray(r) => intersection_point_ray(p, r, eps),
        TypedEntity::Plane(pl) => intersection_point_plane(p, pl, eps),
        TypedEntity::Segment(s) => intersection_point_segment(p, s, eps),
        TypedEntity::Triangle(t) => intersection_point_triangle(p, t, eps),
        TypedEntity::Circle(c) => intersection_point_circle(p, c, eps),
        TypedEntity::Sphere(s) => intersection_point_sphere(p, s, eps),
        TypedEntity::Aabb(b) => intersection_point_aabb(p, b, eps),
    }
}

fn collinear_intersection(
    t1: TypedEntity<'_>,
    t2: TypedEntity<'_>,
    eps: Real,
) -> Result<AnyEntity, QueryError> {
    let res: AnyEntity = match (t1, t2) {
        (TypedEntity::Line(l0), TypedEntity::Line(l1)) => {
            collinear_intersection_line_line(l0, l1).into()
        }
        (TypedEntity::Line(l), TypedEntity::Ray(r)) => collinear_intersection_line_ray(l, r).into(),
        (TypedEntity::Line(l), TypedEntity::Segment(s)) => {
            collinear_intersection_line_segment(l, s).into()
        }
        (TypedEntity::Ray(r0), TypedEntity::Ray(r1)) => {
            collinear_intersection_ray_ray(r0, r1, eps).into()
        }
        (TypedEntity::Ray(r), TypedEntity::Segment(s)) => {
            collinear_intersection_ray_segment(r, s, eps).into()
        }
        (TypedEntity::Segment(s0), TypedEntity::Segment(s1)) => {
            collinear_intersection_segment_segment(s0, s1, eps)?.into()
        }
        _ => {
            return Err(QueryError::InvariantViolation(
                "only lines, rays and segments can be collinear",
            ))
        }
    };

    Ok(res)
}

fn coplanar_intersection(
    t1: TypedEntity<'_>,
    t2: TypedEntity<'_>,
    eps: Real,
) -> Result<AnyEntity, QueryError> {
    if let (Some(a), Some(b)) = (t1.as_linear(), t2.as_linear()) {
        return Ok(coplanar_intersection_linear_linear(a, b, eps).into());
    }

    let res: AnyEntity = match (t1, t2) {
        // A planar entity lying on a plane is its own intersection with it.
        (TypedEntity::Plane(p), TypedEntity::Plane(_)) => (*p).into(),
        (TypedEntity::Line(l), TypedEntity::Plane(_)) => (*l).into(),
        (TypedEntity::Ray(r), TypedEntity::Plane(_)) => (*r).into(),
        (TypedEntity::Plane(_), TypedEntity::Segment(s)) => (*s).into(),
        (TypedEntity::Plane(_), TypedEntity::Triangle(t)) => (*t).into(),
        (TypedEntity::Plane(_), TypedEntity::Circle(c)) => (*c).into(),
        (TypedEntity::Line(l), TypedEntity::Triangle(t)) => {
            coplanar_intersection_line_triangle(l, t, eps).into()
        }
        (TypedEntity::Ray(r), TypedEntity::Triangle(t)) => {
            coplanar_intersection_ray_triangle(r, t, eps).into()
        }
        (TypedEntity::Segment(s), TypedEntity::Triangle(t)) => {
            coplanar_intersection_segment_triangle(s, t, eps)?.into()
        }
        (TypedEntity::Line(l), TypedEntity::Circle(c)) => {
            coplanar_intersection_line_circle(l, c, eps).into()
        }
        (TypedEntity::Ray(r), TypedEntity::Circle(c)) => {
            coplanar_intersection_ray_circle(r, c, eps).into()
        }
        (TypedEntity::Segment(s), TypedEntity::Circle(c)) => {
            coplanar_intersection_segment_circle(s, c, eps)?.into()
        }
        _ => return Err(unsupported(t1, t2)),
    };

    Ok(res)
}

fn general_intersection(
    t1: TypedEntity<'_>,
    t2: TypedEntity<'_>,
    eps: Real,
) -> Result<AnyEntity, QueryError> {
    if t1.as_linear().is_some() && t2.as_linear().is_some() {
        // Skew lines.
        return Ok(AnyEntity::None);
    }

    let res: AnyEntity = match (t1, t2) {
        (TypedEntity::Plane(p0), TypedEntity::Plane(p1)) => {
            intersection_plane_plane(p0, p1, eps).into()
        }
        (TypedEntity::Line(l), TypedEntity::Plane(p)) => intersection_line_plane(l, p, eps).into(),
        (TypedEntity::Ray(r), TypedEntity::Plane(p)) => intersection_ray_plane(r, p, eps).into(),
        (TypedEntity::Plane(p), TypedEntity::Segment(s)) => {
            intersection_segment_plane(s, p, eps).into()
        }
        (TypedEntity::Line(l), TypedEntity::Triangle(t)) => {
            intersection_line_triangle(l, t, eps).into()
        }
        (TypedEntity::Ray(r), TypedEntity::Triangle(t)) => {
            intersection_ray_triangle(r, t, eps).into()
        }
        (TypedEntity::Segment(s), TypedEntity::Triangle(t)) => {
            intersection_segment_triangle(s, t, eps).into()
        }
        (TypedEntity::Line(l), TypedEntity::Circle(c)) => {
            intersection_line_circle(l, c, eps).into()
        }
        (TypedEntity::Ray(r), TypedEntity::Circle(c)) => intersection_ray_circle(r, c, eps).into(),
        (TypedEntity::Segment(s), TypedEntity::Circle(c)) => {
            intersection_segment_circle(s, c, eps).into()
        }
        (TypedEntity::Line(l), TypedEntity::Sphere(s)) => {
            intersection_line_sphere(l, s, eps).into()
        }
        (TypedEntity::Ray(r), TypedEntity::Sphere(s)) => intersection_ray_sphere(r, s, eps).into(),
        (TypedEntity::Segment(seg), TypedEntity::Sphere(s)) => {
            intersection_segment_sphere(seg, s, eps)?.into()
        }
        (TypedEntity::Plane(p), TypedEntity::Triangle(t)) => {
            intersection_plane_triangle(p, t, eps).into()
        }
        (TypedEntity::Plane(p), TypedEntity::Circle(c)) => {
            intersection_plane_circle(p, c, eps).into()
        }
        (TypedEntity::Plane(p), TypedEntity::Sphere(s)) => {
            intersection_plane_sphere(p, s, eps).into()
        }
        (TypedEntity::Triangle(t), TypedEntity::Circle(c)) => {
            intersection_triangle_circle(t, c, eps)?.into()
        }
        (TypedEntity::Circle(c0), TypedEntity::Circle(c1)) => {
            intersection_circle_circle(c0, c1, eps)?.into()
        }
        (TypedEntity::Aabb(b0), TypedEntity::Aabb(b1)) => intersection_aabb_aabb(b0, b1).into(),
        _ => return Err(unsupported(t1, t2)),
    };

    Ok(res)
}
