use crate::page::{parse_int_prefix, PAGE_ANCHOR_PREFIX};

/// Selector for anchors the router looks at; everything else keeps browser defaults.
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorRoute {
    /// A `#page-` anchor. The default jump is suppressed even when the suffix
    /// does not parse.
    Page(Option<i64>),
    Passthrough,
}

impl AnchorRoute {
    pub fn suppresses_default(self) -> bool {
        matches!(self, AnchorRoute::Page(_))
    }
}

pub fn route_anchor(href: &str) -> AnchorRoute {
    match href.strip_prefix(PAGE_ANCHOR_PREFIX) {
        Some(rest) => AnchorRoute::Page(parse_int_prefix(rest)),
        None => AnchorRoute::Passthrough,
    }
}
