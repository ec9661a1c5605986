use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScriptbloxError};

/// Largest page size the fetch endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 20;

/// Field name to query key, in the order keys are emitted
pub const PARAM_NAMES: [(&str, &str); 10] = [
    ("page", "page"),
    ("max", "max"),
    ("exclude", "exclude"),
    ("mode", "mode"),
    ("patched", "patched"),
    ("key", "key"),
    ("universal", "universal"),
    ("verified", "verified"),
    ("sort_by", "sortBy"),
    ("order", "order"),
];

/// Convert an underscore-separated name to camelCase (`sort_by` -> `sortBy`)
pub fn snake_to_camel(name: &str) -> String {
    let mut parts = name.split('_');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Booleans are sent as 1/0
pub fn bool_to_binary(value: bool) -> u8 {
    u8::from(value)
}

/// Script pricing model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Free,
    Paid,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Free => "free",
            Mode::Paid => "paid",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "free" => Ok(Mode::Free),
            "paid" => Ok(Mode::Paid),
            other => Err(format!("unknown mode '{other}' (expected free or paid)")),
        }
    }
}

/// Sort criterion. The service sorts by `updatedAt` when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Views,
    LikeCount,
    CreatedAt,
    #[default]
    UpdatedAt,
    DislikeCount,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Views,
        SortBy::LikeCount,
        SortBy::CreatedAt,
        SortBy::UpdatedAt,
        SortBy::DislikeCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Views => "views",
            SortBy::LikeCount => "likeCount",
            SortBy::CreatedAt => "createdAt",
            SortBy::UpdatedAt => "updatedAt",
            SortBy::DislikeCount => "dislikeCount",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = SortBy::ALL.iter().map(SortBy::as_str).collect();
                format!("unknown sort field '{s}' (expected one of {})", names.join(", "))
            })
    }
}

/// Sort direction. The service defaults to `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown order '{other}' (expected asc or desc)")),
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(Mode, SortBy, SortOrder);

/// Options for `/script/fetch`. Unset fields are left out of the query
/// entirely so the service applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchParams {
    /// Page to start from (1-based)
    pub page: Option<u32>,
    /// Scripts per page, at most [`MAX_PAGE_SIZE`]
    pub max: Option<u32>,
    /// Script id to leave out of the results
    pub exclude: Option<String>,
    pub mode: Option<Mode>,
    pub patched: Option<bool>,
    /// Whether the script has a key system
    pub key: Option<bool>,
    pub universal: Option<bool>,
    pub verified: Option<bool>,
    pub sort_by: Option<SortBy>,
    pub order: Option<SortOrder>,
}

impl FetchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub fn exclude(mut self, id: impl Into<String>) -> Self {
        self.exclude = Some(id.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn patched(mut self, patched: bool) -> Self {
        self.patched = Some(patched);
        self
    }

    pub fn key(mut self, key: bool) -> Self {
        self.key = Some(key);
        self
    }

    pub fn universal(mut self, universal: bool) -> Self {
        self.universal = Some(universal);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Check the constraints the service documents before sending anything
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max {
            if max > MAX_PAGE_SIZE {
                return Err(ScriptbloxError::invalid_argument(format!(
                    "`max` must be less than or equal to {MAX_PAGE_SIZE}, got {max}"
                )));
            }
        }
        Ok(())
    }

    /// Supplied parameters as (query key, value) pairs, in [`PARAM_NAMES`] order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let flag = |value: Option<bool>| value.map(|b| bool_to_binary(b).to_string());
        let values = [
            self.page.map(|p| p.to_string()),
            self.max.map(|m| m.to_string()),
            self.exclude.clone(),
            self.mode.map(|m| m.as_str().to_string()),
            flag(self.patched),
            flag(self.key),
            flag(self.universal),
            flag(self.verified),
            self.sort_by.map(|s| s.as_str().to_string()),
            self.order.map(|o| o.as_str().to_string()),
        ];

        PARAM_NAMES
            .iter()
            .zip(values)
            .filter_map(|((_, wire), value)| value.map(|v| (*wire, v)))
            .collect()
    }

    /// `?k=v&k=v` for the supplied parameters, empty when nothing is set.
    /// Values are not percent-encoded; `ScriptbloxClient::fetch_url` gives the wire form.
    pub fn to_query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("?{}", joined.join("&"))
    }
}
