//! Route parameters and identifier coercion.
//!
//! Every page turns string path parameters into numeric identifiers through
//! `parse_route_id`. Absence is a normal state, so nothing here fails.

use std::collections::BTreeMap;

/// Parse a route parameter into an identifier.
///
/// Integer text (surrounding whitespace allowed, optional sign) yields its
/// value. Missing, empty, fractional, non-numeric or out-of-range input
/// yields `None`.
///
/// ```
/// use pages::route::parse_route_id;
/// assert_eq!(parse_route_id(Some("42")), Some(42));
/// assert_eq!(parse_route_id(Some("4.2")), None);
/// assert_eq!(parse_route_id(None), None);
/// ```
pub fn parse_route_id(raw: Option<&str>) -> Option<i64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<i64>().ok()
}

/// String path parameters as the router hands them over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Named parameter resolved through `parse_route_id`.
    pub fn id(&self, name: &str) -> Option<i64> {
        parse_route_id(self.get(name))
    }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Match a concrete path against a template such as
    /// `/celulas/:celulaId/reports`. Returns the captured parameters, or
    /// `None` when literal segments or the segment count differ. Query
    /// strings and trailing slashes are ignored.
    pub fn match_template(template: &str, path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let tpl: Vec<&str> = segments(template).collect();
        let got: Vec<&str> = segments(path).collect();
        if tpl.len() != got.len() {
            return None;
        }
        let mut params = Self::new();
        for (t, g) in tpl.iter().zip(got.iter()) {
            match t.strip_prefix(':') {
                Some(name) => {
                    params.values.insert(name.to_string(), (*g).to_string());
                }
                None if t == g => {}
                None => return None,
            }
        }
        Some(params)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_text_resolves() {
        for (raw, want) in [("0", 0), ("7", 7), ("-3", -3), ("+12", 12), (" 42 ", 42), ("9223372036854775807", i64::MAX)] {
            assert_eq!(parse_route_id(Some(raw)), Some(want), "input {raw:?}");
        }
    }

    #[test]
    fn anything_else_is_absent() {
        for raw in ["", "   ", "abc", "12abc", "1.5", "1e3", "0x10", "9223372036854775808", "undefined", "null"] {
            assert_eq!(parse_route_id(Some(raw)), None, "input {raw:?}");
        }
        assert_eq!(parse_route_id(None), None);
    }

    #[test]
    fn params_lookup() {
        let p = RouteParams::new().with("celulaId", "5").with("year", "x");
        assert_eq!(p.id("celulaId"), Some(5));
        assert_eq!(p.id("year"), None);
        assert_eq!(p.id("month"), None);
        assert_eq!(p.get("year"), Some("x"));
    }

    #[test]
    fn template_matching() {
        let p = RouteParams::match_template(
            "/celulas/:celulaId/reports/:year/:month",
            "/celulas/5/reports/2024/3?tab=list",
        )
        .unwrap();
        assert_eq!(p.id("celulaId"), Some(5));
        assert_eq!(p.id("year"), Some(2024));
        assert_eq!(p.id("month"), Some(3));

        assert!(RouteParams::match_template("/celulas/:celulaId", "/celulas/5/").is_some());
        assert!(RouteParams::match_template("/celulas/:celulaId", "/categories/5").is_none());
        assert!(RouteParams::match_template("/celulas/:celulaId", "/celulas").is_none());
        assert!(RouteParams::match_template("/profile", "/profile").unwrap().is_empty());
    }

    #[test]
    fn non_numeric_segment_still_matches_but_resolves_absent() {
        let p = RouteParams::match_template("/celulas/:celulaId", "/celulas/new").unwrap();
        assert_eq!(p.get("celulaId"), Some("new"));
        assert_eq!(p.id("celulaId"), None);
    }
}
