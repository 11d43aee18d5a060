use super::Vec2;

/// Translation applied by a surface to everything it draws.
///
/// Surfaces only ever translate; the HiDPI scale is owned by the surface
/// itself and never exposed here, so saving and restoring a `Transform`
/// cannot disturb it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Transform {
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn from_translate(tx: f32, ty: f32) -> Self {
        Self { tx, ty }
    }

    /// Returns this transform followed by an extra translation.
    #[inline]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self { tx: self.tx + dx, ty: self.ty + dy }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x + self.tx, p.y + self.ty)
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self.tx == 0.0 && self.ty == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translations_compose() {
        let t = Transform::identity().translated(0.5, 0.5).translated(1.0, -2.0);
        assert_eq!(t, Transform::from_translate(1.5, -1.5));
    }

    #[test]
    fn apply_offsets_point() {
        let t = Transform::from_translate(0.5, 0.5);
        assert_eq!(t.apply(Vec2::new(10.0, 20.0)), Vec2::new(10.5, 20.5));
    }

    #[test]
    fn default_is_identity() {
        assert!(Transform::default().is_identity());
        assert!(!Transform::from_translate(0.5, 0.0).is_identity());
    }
}
