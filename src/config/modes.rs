//! Search mode definitions: sorting, order and purity.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Result ordering criteria accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sorting {
    DateAdded,
    Relevance,
    Random,
    Views,
    /// Most favorited first (default).
    #[default]
    Favorites,
    Toplist,
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sorting::DateAdded => write!(f, "date_added"),
            Sorting::Relevance => write!(f, "relevance"),
            Sorting::Random => write!(f, "random"),
            Sorting::Views => write!(f, "views"),
            Sorting::Favorites => write!(f, "favorites"),
            Sorting::Toplist => write!(f, "toplist"),
        }
    }
}

impl FromStr for Sorting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date_added" => Ok(Sorting::DateAdded),
            "relevance" => Ok(Sorting::Relevance),
            "random" => Ok(Sorting::Random),
            "views" => Ok(Sorting::Views),
            "favorites" => Ok(Sorting::Favorites),
            "toplist" => Ok(Sorting::Toplist),
            _ => Err(format!("Unknown sorting: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Desc,
    Asc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Desc => write!(f, "desc"),
            Order::Asc => write!(f, "asc"),
        }
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" => Ok(Order::Desc),
            "asc" => Ok(Order::Asc),
            _ => Err(format!("Unknown order: {}", s)),
        }
    }
}

/// Content-safety filter, a three-flag bit string (sfw, sketchy, nsfw).
///
/// `100` selects safe-for-work results only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Purity(String);

fn purity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[01]{3}$").expect("valid purity pattern"))
}

impl Purity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Purity {
    fn default() -> Self {
        Purity("100".to_string())
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Purity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if purity_pattern().is_match(s) {
            Ok(Purity(s.to_string()))
        } else {
            Err(format!(
                "Invalid purity '{}': expected three 0/1 flags such as 100",
                s
            ))
        }
    }
}

impl TryFrom<String> for Purity {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Purity> for String {
    fn from(purity: Purity) -> Self {
        purity.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purity_parse() {
        assert_eq!("100".parse::<Purity>().unwrap().as_str(), "100");
        assert_eq!(" 110 ".parse::<Purity>().unwrap().as_str(), "110");
        assert!("sfw".parse::<Purity>().is_err());
        assert!("1000".parse::<Purity>().is_err());
        assert!("120".parse::<Purity>().is_err());
    }

    #[test]
    fn test_sorting_roundtrips_through_display() {
        for sorting in [Sorting::DateAdded, Sorting::Favorites, Sorting::Toplist] {
            assert_eq!(sorting.to_string().parse::<Sorting>().unwrap(), sorting);
        }
        assert!("popular".parse::<Sorting>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Sorting::default().to_string(), "favorites");
        assert_eq!(Order::default().to_string(), "desc");
        assert_eq!(Purity::default().to_string(), "100");
    }
}
