/// Easing curve applied to animation progress.
///
/// Every curve maps `[0, 1]` onto `[0, 1]`, is monotonic non-decreasing and
/// fixes both endpoints. The default is [`Ease::OutCubic`], the curve the
/// stat counters were tuned against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    #[default]
    OutCubic,
    InOutCubic,
}

impl Ease {
    /// Apply the curve to progress `t`, clamping `t` to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - inv * inv,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (2.0 * inv).powi(2) / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - inv.powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (2.0 * inv).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Ease {
        const ALL: [Self; 7] = [
            Self::Linear,
            Self::InQuad,
            Self::OutQuad,
            Self::InOutQuad,
            Self::InCubic,
            Self::OutCubic,
            Self::InOutCubic,
        ];
    }

    #[test]
    fn endpoints_are_fixed() {
        for ease in Ease::ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in Ease::ALL {
            assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(7.5), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn monotonic_over_grid() {
        for ease in Ease::ALL {
            let mut prev = 0.0;
            for i in 0..=1000 {
                let t = f64::from(i) / 1000.0;
                let v = ease.apply(t);
                assert!(v >= prev, "{ease:?} decreased at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_cubic_midpoint() {
        // 1 - (1 - 0.5)^3 = 0.875, the value the counter scenario relies on.
        assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
    }

    #[test]
    fn serde_names_are_kebab_case() {
        let json = serde_json::to_string(&Ease::OutCubic).unwrap();
        assert_eq!(json, "\"out-cubic\"");
        let back: Ease = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Ease::OutCubic);
    }
}
