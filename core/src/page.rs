use std::fmt;

pub const DEFAULT_TOTAL_PAGES: u32 = 6;
pub const PAGE_ANCHOR_PREFIX: &str = "#page-";
pub const PAGE_ELEMENT_PREFIX: &str = "page-";

/// A page number known to lie in `1..=total` for the navigator that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex(u32);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(1);

    pub fn new(value: i64, total: u32) -> Result<Self, PageError> {
        if value < 1 || value > i64::from(total) {
            return Err(PageError::OutOfRange {
                requested: value,
                total,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn parse(raw: &str, total: u32) -> Result<Self, PageError> {
        let value = parse_int_prefix(raw).ok_or_else(|| PageError::NotANumber(raw.to_string()))?;
        Self::new(value, total)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn prev(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    pub fn next(self, total: u32) -> Option<Self> {
        (self.0 < total).then(|| Self(self.0 + 1))
    }

    pub fn element_id(self) -> String {
        format!("{PAGE_ELEMENT_PREFIX}{}", self.0)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    NotANumber(String),
    OutOfRange { requested: i64, total: u32 },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotANumber(raw) => write!(f, "'{raw}' is not a page number"),
            PageError::OutOfRange { requested, total } => {
                write!(f, "page {requested} is outside 1..={total}")
            }
        }
    }
}

impl std::error::Error for PageError {}

/// Reads a leading integer the way markup attributes are read by the page script:
/// leading whitespace and one sign are accepted, a `0x` prefix switches to hex, and
/// parsing stops at the first character that is not a digit.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let end = digits
        .chars()
        .take_while(|ch| ch.is_digit(radix))
        .count();
    if end == 0 {
        return None;
    }
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_ignores_trailing_garbage() {
        assert_eq!(parse_int_prefix("3"), Some(3));
        assert_eq!(parse_int_prefix("  12abc"), Some(12));
        assert_eq!(parse_int_prefix("-4"), Some(-4));
        assert_eq!(parse_int_prefix("+5px"), Some(5));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn int_prefix_reads_hex_like_the_page_script() {
        assert_eq!(parse_int_prefix("0x3"), Some(3));
        assert_eq!(parse_int_prefix("0XA"), Some(10));
        assert_eq!(parse_int_prefix("-0x2"), Some(-2));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xg"), None);
        assert_eq!(parse_int_prefix("07"), Some(7));
    }

    #[test]
    fn page_index_bounds() {
        assert_eq!(PageIndex::new(1, 6).map(PageIndex::get), Ok(1));
        assert_eq!(PageIndex::new(6, 6).map(PageIndex::get), Ok(6));
        assert_eq!(
            PageIndex::new(7, 6),
            Err(PageError::OutOfRange {
                requested: 7,
                total: 6
            })
        );
        assert!(PageIndex::new(0, 6).is_err());
        assert_eq!(
            PageIndex::parse("two", 6),
            Err(PageError::NotANumber("two".to_string()))
        );
    }

    #[test]
    fn neighbours_stop_at_edges() {
        let first = PageIndex::FIRST;
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(6).map(PageIndex::get), Some(2));
        let last = PageIndex::new(6, 6).unwrap();
        assert_eq!(last.next(6), None);
        assert_eq!(last.element_id(), "page-6");
    }
}
