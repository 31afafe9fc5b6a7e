use crate::config::{ReportCopy, Rgb, Theme, Thresholds};

/// Score band shared by the interpretation sentence and the bar colour.
///
/// Bands are closed-open: `[85, 100]`, `[70, 85)`, `[55, 70)`, `[0, 55)` with the
/// default thresholds, so a boundary value always lands in the higher band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadinessTier {
    Advanced,
    Good,
    Developing,
    Foundational,
}

impl ReadinessTier {
    pub const ALL: [ReadinessTier; 4] = [
        ReadinessTier::Advanced,
        ReadinessTier::Good,
        ReadinessTier::Developing,
        ReadinessTier::Foundational,
    ];

    pub fn for_percentage(percentage: u32, thresholds: &Thresholds) -> Self {
        if percentage >= thresholds.advanced {
            ReadinessTier::Advanced
        } else if percentage >= thresholds.good {
            ReadinessTier::Good
        } else if percentage >= thresholds.developing {
            ReadinessTier::Developing
        } else {
            ReadinessTier::Foundational
        }
    }
}

impl Theme {
    pub fn bar_color(&self, tier: ReadinessTier) -> Rgb {
        match tier {
            ReadinessTier::Advanced => self.advanced,
            ReadinessTier::Good => self.good,
            ReadinessTier::Developing => self.developing,
            ReadinessTier::Foundational => self.foundational,
        }
    }
}

impl ReportCopy {
    pub fn interpretation(&self, tier: ReadinessTier) -> &str {
        match tier {
            ReadinessTier::Advanced => &self.interpretation_advanced,
            ReadinessTier::Good => &self.interpretation_good,
            ReadinessTier::Developing => &self.interpretation_developing,
            ReadinessTier::Foundational => &self.interpretation_foundational,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(p: u32) -> ReadinessTier {
        ReadinessTier::for_percentage(p, &Thresholds::default())
    }

    #[test]
    fn boundaries_resolve_to_the_higher_tier() {
        assert_eq!(tier(85), ReadinessTier::Advanced);
        assert_eq!(tier(84), ReadinessTier::Good);
        assert_eq!(tier(70), ReadinessTier::Good);
        assert_eq!(tier(69), ReadinessTier::Developing);
        assert_eq!(tier(55), ReadinessTier::Developing);
        assert_eq!(tier(54), ReadinessTier::Foundational);
        assert_eq!(tier(0), ReadinessTier::Foundational);
        assert_eq!(tier(100), ReadinessTier::Advanced);
    }

    #[test]
    fn every_percentage_maps_to_exactly_one_band() {
        let thresholds = Thresholds::default();
        for p in 0..=100u32 {
            let expected = match p {
                85..=100 => ReadinessTier::Advanced,
                70..=84 => ReadinessTier::Good,
                55..=69 => ReadinessTier::Developing,
                _ => ReadinessTier::Foundational,
            };
            assert_eq!(ReadinessTier::for_percentage(p, &thresholds), expected, "p={p}");
        }
    }

    #[test]
    fn colors_and_sentences_follow_the_tier() {
        let theme = Theme::default();
        let copy = ReportCopy::default();
        assert_eq!(theme.bar_color(tier(90)), Rgb(16, 185, 129));
        assert_eq!(theme.bar_color(tier(72)), Rgb(59, 130, 246));
        assert_eq!(theme.bar_color(tier(60)), Rgb(245, 158, 11));
        assert_eq!(theme.bar_color(tier(10)), Rgb(239, 68, 68));
        assert!(copy.interpretation(tier(92)).contains("strong foundations"));
        assert!(copy.interpretation(tier(70)).contains("solid capabilities"));
        assert!(copy.interpretation(tier(55)).contains("needs focused improvement"));
        assert!(copy.interpretation(tier(54)).contains("fundamental gaps"));
    }

    #[test]
    fn overridden_thresholds_move_the_boundaries() {
        let strict = Thresholds {
            advanced: 95,
            good: 80,
            developing: 60,
        };
        assert_eq!(ReadinessTier::for_percentage(90, &strict), ReadinessTier::Good);
        assert_eq!(
            ReadinessTier::for_percentage(59, &strict),
            ReadinessTier::Foundational
        );
    }
}
