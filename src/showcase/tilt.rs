//! Tilt Geometry
//!
//! Pure mapping from pointer position to card rotation angles, and the
//! fixed per-index offsets that fake a physical stack. Nothing in here
//! knows about the renderer.

/// Maximum rotation per axis, reached at the card's edges.
pub const MAX_TILT_DEG: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation around the horizontal axis; positive tips the top away.
    pub rotate_x: f32,
    /// Rotation around the vertical axis; positive tips the right away.
    pub rotate_y: f32,
}

impl Tilt {
    pub fn is_level(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }
}

/// Normalizes a pointer position within a bounding box to offsets in
/// [-0.5, 0.5] per axis, (0, 0) at the center.
pub fn normalized_offset(local_x: f32, local_y: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (local_x / width - 0.5).clamp(-0.5, 0.5);
    let y = (local_y / height - 0.5).clamp(-0.5, 0.5);
    (x, y)
}

/// Maps normalized offsets to tilt angles: a cursor at the right edge
/// yields +15 deg around Y, at the top edge +15 deg around X. Continuous
/// and reversible; the center yields a level card.
pub fn tilt_for(offset_x: f32, offset_y: f32) -> Tilt {
    let x = offset_x.clamp(-0.5, 0.5);
    let y = offset_y.clamp(-0.5, 0.5);
    Tilt {
        rotate_x: -y * 2.0 * MAX_TILT_DEG,
        rotate_y: x * 2.0 * MAX_TILT_DEG,
    }
}

/// Fixed positional/scale/opacity offset applied to the card at `index`
/// while stacked (index 0 is the top of the stack).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackOffset {
    pub y: f32,
    pub depth: f32,
    pub scale: f32,
    pub opacity: f32,
}

pub fn stack_offset(index: usize) -> StackOffset {
    let i = index as f32;
    StackOffset {
        y: i * -8.0,
        depth: i * -20.0,
        scale: (1.0 - i * 0.05).max(0.0),
        opacity: (1.0 - i * 0.15).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_level() {
        assert!(tilt_for(0.0, 0.0).is_level());
    }

    #[test]
    fn test_edges_reach_max_tilt() {
        let t = tilt_for(0.5, 0.5);
        assert_eq!(t.rotate_y, MAX_TILT_DEG);
        assert_eq!(t.rotate_x, -MAX_TILT_DEG);

        let t = tilt_for(-0.5, -0.5);
        assert_eq!(t.rotate_y, -MAX_TILT_DEG);
        assert_eq!(t.rotate_x, MAX_TILT_DEG);
    }

    #[test]
    fn test_tilt_is_symmetric() {
        let a = tilt_for(0.25, -0.1);
        let b = tilt_for(-0.25, 0.1);
        assert_eq!(a.rotate_x, -b.rotate_x);
        assert_eq!(a.rotate_y, -b.rotate_y);
    }

    #[test]
    fn test_offsets_beyond_bounds_are_clamped() {
        let t = tilt_for(3.0, -3.0);
        assert_eq!(t.rotate_y, MAX_TILT_DEG);
        assert_eq!(t.rotate_x, MAX_TILT_DEG);
    }

    #[test]
    fn test_normalized_offset() {
        assert_eq!(normalized_offset(5.0, 5.0, 10.0, 10.0), (0.0, 0.0));
        assert_eq!(normalized_offset(10.0, 0.0, 10.0, 10.0), (0.5, -0.5));
        assert_eq!(normalized_offset(0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_stack_offsets() {
        let top = stack_offset(0);
        assert_eq!(top.y, 0.0);
        assert_eq!(top.scale, 1.0);
        assert_eq!(top.opacity, 1.0);

        let third = stack_offset(2);
        assert_eq!(third.y, -16.0);
        assert_eq!(third.depth, -40.0);
        assert!((third.scale - 0.9).abs() < 1e-6);
        assert!((third.opacity - 0.7).abs() < 1e-6);

        // Deep indices bottom out instead of going negative.
        assert_eq!(stack_offset(50).scale, 0.0);
        assert_eq!(stack_offset(50).opacity, 0.0);
    }
}
