//! Surface properties for collision response

/// Friction and elasticity carried by every collision shape
///
/// Friction controls how much tangential velocity survives a contact,
/// elasticity (restitution) how much normal velocity is reflected.
/// Elasticity above 1.0 models energy gain and is allowed; friction is
/// clamped to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceProperties {
    /// Friction coefficient (0.0 = frictionless, 1.0 = full grip)
    pub friction: f32,
    /// Elasticity/restitution (0.0 = no bounce, 1.0 = perfect bounce)
    pub elasticity: f32,
}

impl Default for SurfaceProperties {
    fn default() -> Self {
        Self {
            friction: 0.5,
            elasticity: 0.0,
        }
    }
}

impl SurfaceProperties {
    /// Create surface properties with the given friction and elasticity
    pub fn new(friction: f32, elasticity: f32) -> Self {
        Self {
            friction: friction.clamp(0.0, 1.0),
            elasticity: elasticity.max(0.0),
        }
    }

    /// Combine two surfaces for collision response
    ///
    /// Both coefficients multiply, so a pairing only bounces or grips as much
    /// as its least bouncy/grippy participant allows.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            friction: self.friction * other.friction,
            elasticity: self.elasticity * other.elasticity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface() {
        let surface = SurfaceProperties::default();
        assert_eq!(surface.friction, 0.5);
        assert_eq!(surface.elasticity, 0.0);
    }

    #[test]
    fn test_new_clamps_friction() {
        let surface = SurfaceProperties::new(1.5, 0.5);
        assert_eq!(surface.friction, 1.0);

        let surface = SurfaceProperties::new(-0.5, 0.5);
        assert_eq!(surface.friction, 0.0);
    }

    #[test]
    fn test_elasticity_above_one_allowed() {
        // Energy-gaining surfaces are legal; only the lower bound is clamped
        let surface = SurfaceProperties::new(0.5, 1.5);
        assert_eq!(surface.elasticity, 1.5);

        let surface = SurfaceProperties::new(0.5, -1.0);
        assert_eq!(surface.elasticity, 0.0);
    }

    #[test]
    fn test_combine_multiplies() {
        let ball = SurfaceProperties::new(0.7, 1.0);
        let line = SurfaceProperties::new(1.0, 0.5);
        let combined = ball.combine(&line);

        assert!((combined.friction - 0.7).abs() < 0.0001);
        assert!((combined.elasticity - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_combine_is_commutative() {
        let a = SurfaceProperties::new(0.3, 0.5);
        let b = SurfaceProperties::new(0.7, 0.2);

        let ab = a.combine(&b);
        let ba = b.combine(&a);

        assert!((ab.friction - ba.friction).abs() < 0.0001);
        assert!((ab.elasticity - ba.elasticity).abs() < 0.0001);
    }

    #[test]
    fn test_combine_with_frictionless() {
        let a = SurfaceProperties::new(0.0, 0.5);
        let b = SurfaceProperties::new(0.9, 0.5);
        assert_eq!(a.combine(&b).friction, 0.0);
    }
}
