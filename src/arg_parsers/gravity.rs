/// Gravity names exactly as imagemagick spells them in `-gravity` and in `gravity` draw primitives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Gravity {
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

#[cfg(test)]
mod tests {
    use super::Gravity;
    use std::str::FromStr;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Gravity::from_str("NorthWest"), Ok(Gravity::NorthWest));
        assert_eq!(Gravity::from_str("northwest"), Ok(Gravity::NorthWest));
    }

    #[test]
    fn test_invalid() {
        assert!(Gravity::from_str("unknown").is_err());
        assert!(Gravity::from_str("💥 non-ascii").is_err());
        assert!(Gravity::from_str("").is_err());
    }

    #[test]
    fn test_displays_imagemagick_spelling() {
        assert_eq!(Gravity::SouthEast.to_string(), "SouthEast");
        assert_eq!(Gravity::Center.to_string(), "Center");
    }
}
