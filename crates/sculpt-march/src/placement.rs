use sculpt_field::Voxel;
use sculpt_geom::{GridMapping, Vec2};

/// Below this, two scalars are treated as equal.
pub const VALUE_EPSILON: f64 = 1e-9;

/// Where along a crossing edge an endpoint lands when interpolation is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpolationMethod {
    /// Linear crossing of the threshold between the two corner values.
    #[default]
    Threshold,
    /// Start from the solid corner and move toward the other by the solid
    /// corner's value.
    SolidAnchored,
}

/// Endpoint on the edge between `c0` and `c1`. `None` places it at the midpoint.
pub fn edge_point(
    c0: &Voxel,
    c1: &Voxel,
    mapping: &GridMapping,
    threshold: f64,
    method: Option<InterpolationMethod>,
) -> Vec2 {
    match method {
        None => {
            let p0 = mapping.to_world(c0.x, c0.y);
            let p1 = mapping.to_world(c1.x, c1.y);
            p0.midpoint(p1)
        }
        Some(InterpolationMethod::Threshold) => threshold_point(c0, c1, mapping, threshold),
        Some(InterpolationMethod::SolidAnchored) => solid_anchored_point(c0, c1, mapping),
    }
}

fn threshold_point(c0: &Voxel, c1: &Voxel, mapping: &GridMapping, threshold: f64) -> Vec2 {
    let p0 = mapping.to_world(c0.x, c0.y);
    let p1 = mapping.to_world(c1.x, c1.y);
    let (v0, v1) = (c0.value, c1.value);

    if (threshold - v0).abs() <= VALUE_EPSILON {
        return p0;
    }
    if (threshold - v1).abs() <= VALUE_EPSILON {
        return p1;
    }
    // no usable gradient
    if (v0 - v1).abs() <= VALUE_EPSILON {
        return p0;
    }
    let t = ((threshold - v0) / (v1 - v0)).clamp(0.0, 1.0);
    p0.lerp(p1, t as f32)
}

fn solid_anchored_point(c0: &Voxel, c1: &Voxel, mapping: &GridMapping) -> Vec2 {
    let (first, second) = if c0.solid { (c0, c1) } else { (c1, c0) };
    let p0 = mapping.to_world(first.x, first.y);
    let p1 = mapping.to_world(second.x, second.y);
    let t = first.value.clamp(0.0, 1.0);
    p0.lerp(p1, t as f32)
}
