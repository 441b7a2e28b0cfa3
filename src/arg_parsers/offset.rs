// imagemagick geometry offsets always carry an explicit sign per axis: `+10-5`.
// Unlike a full geometry string there is no width or height here, and both
// axes are mandatory, so `+10` on its own is rejected rather than guessed at.

use std::ffi::OsStr;
use std::fmt::Display;
use std::str::{self, FromStr};

use crate::arg_parse_err::ArgParseErr;

#[cfg(test)]
use quickcheck::Arbitrary;

/// Pixel displacement from the anchor point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The same offset moved diagonally by `delta` pixels on both axes,
    /// or `None` if either axis would overflow.
    pub fn shifted(self, delta: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta)?,
            y: self.y.checked_add(delta)?,
        })
    }
}

#[cfg(test)]
impl Arbitrary for Offset {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            x: i32::from(i16::arbitrary(g)),
            y: i32::from(i16::arbitrary(g)),
        }
    }
}

/// Geometry form: `+X+Y`. Zero offsets still print as `+0+0`.
impl Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}{:+}", self.x, self.y)
    }
}

impl FromStr for Offset {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(OsStr::new(s))
    }
}

impl TryFrom<&OsStr> for Offset {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let invalid_offset_err = || ArgParseErr::with_msg(format!("invalid offset `{}'", s.display()));

        if !s.is_ascii() {
            return Err(invalid_offset_err());
        }

        let mut ascii = s.as_encoded_bytes();
        let x = read_signed_int(&mut ascii).ok_or_else(invalid_offset_err)?;
        let y = read_signed_int(&mut ascii).ok_or_else(invalid_offset_err)?;
        if !ascii.is_empty() {
            return Err(invalid_offset_err());
        }
        Ok(Self { x, y })
    }
}

/// Reads a mandatory sign followed by at least one digit, advancing `input` past it.
fn read_signed_int(input: &mut &[u8]) -> Option<i32> {
    if ![Some(&b'+'), Some(&b'-')].contains(&input.first()) {
        return None;
    }
    let digits = count_leading_digits(&input[1..]);
    if digits == 0 {
        return None;
    }
    let (number, remainder) = input.split_at(1 + digits);
    // all ASCII by construction; parse() still rejects out-of-range values
    let int = str::from_utf8(number).ok()?.parse::<i32>().ok()?;
    *input = remainder;
    Some(int)
}

fn count_leading_digits(input: &[u8]) -> usize {
    input
        .iter()
        .copied()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_positive_and_negative() {
        assert_eq!(Offset::from_str("+10-5"), Ok(Offset::new(10, -5)));
        assert_eq!(Offset::from_str("-0+0"), Ok(Offset::new(0, 0)));
    }

    #[test]
    fn test_zero_is_still_printed() {
        assert_eq!(Offset::default().to_string(), "+0+0");
        assert_eq!(Offset::new(-3, 7).to_string(), "-3+7");
    }

    #[test]
    fn test_rejects_partial_or_garbage() {
        for bogus in ["", "+10", "10+10", "+10+", "+1+2+3", "+1x+2", "+99999999999+0", "＋1+1"] {
            assert!(Offset::from_str(bogus).is_err(), "accepted {bogus:?}");
        }
    }

    #[test]
    fn test_shifted() {
        assert_eq!(Offset::new(4, -2).shifted(1), Some(Offset::new(5, -1)));
        assert_eq!(Offset::new(i32::MAX, 0).shifted(1), None);
        assert_eq!(Offset::new(0, i32::MAX).shifted(1), None);
        assert_eq!(Offset::new(i32::MIN, i32::MIN).shifted(-1), None);
    }

    #[quickcheck]
    fn roundtrip_is_lossless(orig: Offset) {
        let parsed = Offset::from_str(&orig.to_string()).unwrap();
        assert_eq!(orig, parsed)
    }
}
