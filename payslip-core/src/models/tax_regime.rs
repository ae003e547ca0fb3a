use serde::{Deserialize, Serialize};

/// Income tax regime selecting which slab table applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    #[default]
    Old,
    New,
}

impl TaxRegime {
    pub const ALL: [TaxRegime; 2] = [TaxRegime::Old, TaxRegime::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Old => "Old regime",
            Self::New => "New regime",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_regime_is_old() {
        assert_eq!(TaxRegime::default(), TaxRegime::Old);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for regime in TaxRegime::ALL {
            assert_eq!(TaxRegime::parse(regime.as_str()), Some(regime));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(TaxRegime::parse("Old"), None);
        assert_eq!(TaxRegime::parse("NEW"), None);
        assert_eq!(TaxRegime::parse(""), None);
    }
}
