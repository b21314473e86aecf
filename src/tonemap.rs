use crate::algebra::{Color, Vec3};
use serde::Deserialize;

/// Final colour mapping applied by the host before the 8-bit write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneMap {
    /// Pass through; values outside [0,1] are clamped at write time.
    #[default]
    Clamp,
    Reinhard,
    Aces,
}

impl ToneMap {
    pub fn apply(self, c: Color) -> Color {
        match self {
            Self::Clamp => c,
            Self::Reinhard => reinhard(c),
            Self::Aces => aces_film(c),
        }
    }
}

pub fn reinhard(c: Vec3) -> Vec3 {
    Vec3(
        c.0 / (1.0 + c.0),
        c.1 / (1.0 + c.1),
        c.2 / (1.0 + c.2),
    )
}

#[inline]
pub fn aces_film(c: Vec3) -> Vec3 {
    let a = 2.51;
    let b = 0.03;
    let c2 = 2.43;
    let d = 0.59;
    let e = 0.14;

    c.map(|x| ((x * (a * x + b)) / (x * (c2 * x + d) + e)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_identity_before_write() {
        let c = Vec3(1.5, -0.2, 0.3);
        assert_eq!(ToneMap::Clamp.apply(c), c);
    }

    #[test]
    fn reinhard_compresses_into_unit_range() {
        let c = ToneMap::Reinhard.apply(Vec3(1.0, 3.0, 0.0));
        assert_eq!(c, Vec3(0.5, 0.75, 0.0));
    }

    #[test]
    fn aces_stays_in_unit_range() {
        let c = ToneMap::Aces.apply(Vec3(100.0, 0.0, 0.5));
        for x in [c.0, c.1, c.2] {
            assert!((0.0..=1.0).contains(&x));
        }
    }
}
