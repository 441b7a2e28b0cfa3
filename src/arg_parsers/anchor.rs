use std::{ffi::OsStr, str::FromStr};

use strum::VariantArray;

use crate::{arg_parse_err::ArgParseErr, arg_parsers::Gravity, error::MarkError};

/// Where the watermark is placed on the source image.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::VariantArray,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    pub fn gravity(self) -> Gravity {
        match self {
            Anchor::TopLeft => Gravity::NorthWest,
            Anchor::Top => Gravity::North,
            Anchor::TopRight => Gravity::NorthEast,
            Anchor::Left => Gravity::West,
            Anchor::Center => Gravity::Center,
            Anchor::Right => Gravity::East,
            Anchor::BottomLeft => Gravity::SouthWest,
            Anchor::Bottom => Gravity::South,
            Anchor::BottomRight => Gravity::SouthEast,
        }
    }
}

impl From<Gravity> for Anchor {
    fn from(gravity: Gravity) -> Self {
        match gravity {
            Gravity::NorthWest => Anchor::TopLeft,
            Gravity::North => Anchor::Top,
            Gravity::NorthEast => Anchor::TopRight,
            Gravity::West => Anchor::Left,
            Gravity::Center => Anchor::Center,
            Gravity::East => Anchor::Right,
            Gravity::SouthWest => Anchor::BottomLeft,
            Gravity::South => Anchor::Bottom,
            Gravity::SouthEast => Anchor::BottomRight,
        }
    }
}

/// Accepts both our own names (`bottom-right`) and imagemagick gravity names (`SouthEast`).
impl FromStr for Anchor {
    type Err = MarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let by_name = Anchor::VARIANTS.iter().copied().find(|anchor| {
            let name: &'static str = anchor.into();
            name.eq_ignore_ascii_case(s)
        });
        by_name
            .or_else(|| Gravity::from_str(s).ok().map(Anchor::from))
            .ok_or_else(|| MarkError::unsupported("anchor", s))
    }
}

impl TryFrom<&OsStr> for Anchor {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        s.to_str()
            .and_then(|s_utf8| Anchor::from_str(s_utf8).ok())
            .ok_or_else(|| {
                ArgParseErr::with_msg(format!("unrecognized anchor `{}'", s.to_string_lossy()))
            })
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Anchor {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(Anchor::VARIANTS).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_own_names() {
        assert_eq!(Anchor::from_str("bottom-right"), Ok(Anchor::BottomRight));
        assert_eq!(Anchor::from_str("Top-Left"), Ok(Anchor::TopLeft));
        assert_eq!(Anchor::from_str("center"), Ok(Anchor::Center));
    }

    #[test]
    fn test_parse_gravity_names() {
        assert_eq!(Anchor::from_str("SouthEast"), Ok(Anchor::BottomRight));
        assert_eq!(Anchor::from_str("north"), Ok(Anchor::Top));
    }

    #[test]
    fn test_unknown_is_rejected() {
        for bogus in ["", "middle", "bottom_right", "south-east", "💥"] {
            assert_eq!(
                Anchor::from_str(bogus),
                Err(MarkError::unsupported("anchor", bogus))
            );
        }
    }

    #[test]
    fn test_mapping_is_distinct_and_reversible() {
        let gravities: HashSet<_> = Anchor::VARIANTS.iter().map(|a| a.gravity()).collect();
        assert_eq!(gravities.len(), Anchor::VARIANTS.len());
        for anchor in Anchor::VARIANTS {
            assert_eq!(Anchor::from(anchor.gravity()), *anchor);
        }
    }

    #[test]
    fn test_default_is_center() {
        assert_eq!(Anchor::default(), Anchor::Center);
    }
}
