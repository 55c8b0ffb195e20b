use super::cube::Cube;

/// Cube coordinates with real-valued components.
///
/// These arise from interpolation or from scaling by non-integers. The components are
/// expected to sum to approximately zero; [`FractionalCube::round`] snaps them back to the
/// nearest [`Cube`], where the sum is exact again.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FractionalCube {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCube {
    pub fn new(q: f64, r: f64, s: f64) -> FractionalCube {
        FractionalCube { q, r, s }
    }

    /// Round to the nearest hex.
    ///
    /// Each component is rounded independently, then whichever moved furthest is recomputed
    /// from the other two. `q` is only recomputed when its residual is strictly the largest;
    /// otherwise `r` is recomputed if its residual beats `s`'s, and `s` is recomputed in every
    /// remaining case, including ties.
    ///
    /// See [reference](https://www.redblobgames.com/grids/hexagons/#rounding).
    pub fn round(self) -> Cube {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // in the remaining case s is implied by q and r

        Cube::axial(q as i32, r as i32)
    }
}

impl From<Cube> for FractionalCube {
    fn from(cube: Cube) -> Self {
        FractionalCube {
            q: cube.q() as f64,
            r: cube.r() as f64,
            s: cube.s() as f64,
        }
    }
}

/// Round a fractional coordinate to the nearest hex.
///
/// Equivalent to [`FractionalCube::round`].
pub fn round_hex(cube: FractionalCube) -> Cube {
    cube.round()
}
