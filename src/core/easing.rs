use serde::{Deserialize, Serialize};

const BACK_OVERSHOOT: f64 = 1.701_58;

/// Timing curve applied to transition progress in `[0, 1]`.
///
/// All curves map `0 -> 0` and `1 -> 1`. `BackInOut` overshoots on both ends,
/// so intermediate samples can fall slightly outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    ExpInOut,
    BackInOut,
    Linear,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::ExpInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    tpmt(1.0 - t) / 2.0
                } else {
                    (2.0 - tpmt(t - 1.0)) / 2.0
                }
            }
            Self::BackInOut => {
                let s = BACK_OVERSHOOT;
                let t = t * 2.0;
                if t < 1.0 {
                    t * t * ((s + 1.0) * t - s) / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * ((s + 1.0) * t + s) + 2.0) / 2.0
                }
            }
        }
    }
}

/// `2^(-10x)` rescaled so that `tpmt(0) == 1` and `tpmt(1) == 0` exactly.
fn tpmt(x: f64) -> f64 {
    (2f64.powf(-10.0 * x) - 0.000_976_562_5) * 1.000_977_517_106_549_4
}
