use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search filters understood by the ZoomEye query language.
///
/// This is the documented vocabulary only. [`Filters`] accepts any key and
/// serializes it verbatim, so new server-side filters work without a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// IP address
    Ip,
    /// City name
    City,
    /// Country code or name
    Country,
    /// Application / component name
    App,
    /// Application version
    Ver,
    /// Device type
    Device,
    /// Operating system
    Os,
    /// Service name
    Service,
    /// Network range in CIDR notation
    Cidr,
    /// Host name
    Hostname,
    /// Port number
    Port,
    /// Autonomous system number
    Asn,
    /// Web application
    Webapp,
    /// HTTP header content
    Header,
    /// Page keywords
    Keywords,
    /// Page description
    Desc,
    /// Page title
    Title,
    /// Site domain
    Site,
}

impl Filter {
    /// Every documented filter, in documentation order
    pub const ALL: [Self; 18] = [
        Self::Ip,
        Self::City,
        Self::Country,
        Self::App,
        Self::Ver,
        Self::Device,
        Self::Os,
        Self::Service,
        Self::Cidr,
        Self::Hostname,
        Self::Port,
        Self::Asn,
        Self::Webapp,
        Self::Header,
        Self::Keywords,
        Self::Desc,
        Self::Title,
        Self::Site,
    ];

    /// The key as it appears in a query string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::City => "city",
            Self::Country => "country",
            Self::App => "app",
            Self::Ver => "ver",
            Self::Device => "device",
            Self::Os => "os",
            Self::Service => "service",
            Self::Cidr => "cidr",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Asn => "asn",
            Self::Webapp => "webapp",
            Self::Header => "header",
            Self::Keywords => "keywords",
            Self::Desc => "desc",
            Self::Title => "title",
            Self::Site => "site",
        }
    }
}

impl AsRef<str> for Filter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| format!("unknown filter: {s}"))
    }
}

/// Filter terms to narrow a search, kept in insertion order.
///
/// Setting a key twice replaces the earlier value but keeps its position.
///
/// Serializes as a list of `[key, value]` pairs so order survives formats
/// whose maps are unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct Filters {
    terms: Vec<(String, String)>,
}

impl Filters {
    /// Create an empty filter set
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a filter term, builder style
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a filter term
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl ToString) {
        let key = key.as_ref();
        let value = value.to_string();
        match self.terms.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.terms.push((key.to_string(), value)),
        }
    }

    /// Look up the value for a key
    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.terms
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of filter terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no filter terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Keys not in the documented [`Filter`] vocabulary
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| k.parse::<Filter>().is_err())
    }
}

impl<K: AsRef<str>, V: ToString> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}

impl From<Vec<(String, String)>> for Filters {
    fn from(terms: Vec<(String, String)>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<Filters> for Vec<(String, String)> {
    fn from(filters: Filters) -> Self {
        filters.terms
    }
}
