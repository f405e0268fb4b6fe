use serde::{Deserialize, Serialize};

/// Age band used to select the employee pension contribution rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    /// Ages 17 to 52.
    #[default]
    Under53,
    /// Ages 53 to 62.
    From53To62,
    /// Ages 63 and over.
    Over62,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [Self::Under53, Self::From53To62, Self::Over62];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under53 => "17-52",
            Self::From53To62 => "53-62",
            Self::Over62 => "63+",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "17-52" => Some(Self::Under53),
            "53-62" => Some(Self::From53To62),
            "63+" => Some(Self::Over62),
            _ => None,
        }
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_band() {
        for band in AgeBand::ALL {
            assert_eq!(AgeBand::parse(band.as_str()), Some(band));
        }
    }

    #[test]
    fn parse_rejects_unknown_label() {
        assert_eq!(AgeBand::parse("18-65"), None);
        assert_eq!(AgeBand::parse(""), None);
    }

    #[test]
    fn default_is_youngest_band() {
        assert_eq!(AgeBand::default(), AgeBand::Under53);
    }
}
