//! Parameter groups of the archive documentation and how callers select them.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the five column tables published by the archive, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterGroup {
    Default,
    Planet,
    Stellar,
    Photometry,
    Color,
}

impl ParameterGroup {
    /// All groups, in the order their tables appear on the documentation page.
    pub const ALL: [ParameterGroup; 5] = [
        ParameterGroup::Default,
        ParameterGroup::Planet,
        ParameterGroup::Stellar,
        ParameterGroup::Photometry,
        ParameterGroup::Color,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParameterGroup::Default => "default",
            ParameterGroup::Planet => "planet",
            ParameterGroup::Stellar => "stellar",
            ParameterGroup::Photometry => "photometry",
            ParameterGroup::Color => "color",
        }
    }

    /// Integer code, `1..=5`.
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Only these groups list `(+)`/`(-)` error columns in the documentation.
    pub fn has_uncertainties(self) -> bool {
        matches!(
            self,
            ParameterGroup::Default | ParameterGroup::Planet | ParameterGroup::Stellar
        )
    }
}

impl fmt::Display for ParameterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved selection: one group or the union of all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSelection {
    All,
    One(ParameterGroup),
}

impl GroupSelection {
    pub fn groups(self) -> Vec<ParameterGroup> {
        match self {
            GroupSelection::All => ParameterGroup::ALL.to_vec(),
            GroupSelection::One(g) => vec![g],
        }
    }
}

impl fmt::Display for GroupSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSelection::All => f.write_str("all"),
            GroupSelection::One(g) => g.fmt(f),
        }
    }
}

impl From<ParameterGroup> for GroupSelection {
    fn from(g: ParameterGroup) -> Self {
        GroupSelection::One(g)
    }
}

/// Caller-facing group keyword, either a name or an integer code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    Name(String),
    Code(i64),
}

impl GroupSelector {
    pub fn by_name(name: impl Into<String>) -> Self {
        GroupSelector::Name(name.into())
    }

    pub fn by_code(code: i64) -> Self {
        GroupSelector::Code(code)
    }

    pub fn resolve(&self) -> Result<GroupSelection> {
        let resolved = match self {
            GroupSelector::Name(name) if name.trim().eq_ignore_ascii_case("all") => {
                Some(GroupSelection::All)
            }
            GroupSelector::Name(name) => ParameterGroup::from_name(name).map(GroupSelection::One),
            GroupSelector::Code(code) => ParameterGroup::from_code(*code).map(GroupSelection::One),
        };

        match resolved {
            Some(selection) => {
                tracing::debug!(keyword = %self, %selection, "resolved parameter group");
                Ok(selection)
            }
            None => Err(Error::InvalidGroup {
                given: self.to_string(),
                valid: valid_keywords(),
            }),
        }
    }
}

impl fmt::Display for GroupSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSelector::Name(name) => f.write_str(name),
            GroupSelector::Code(code) => write!(f, "{code}"),
        }
    }
}

/// Integers are codes, anything else is a name.
impl FromStr for GroupSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(code) => GroupSelector::Code(code),
            Err(_) => GroupSelector::Name(s.to_string()),
        })
    }
}

fn valid_keywords() -> String {
    let names: Vec<String> = ParameterGroup::ALL
        .iter()
        .map(|g| format!("{} ({})", g.name(), g.code()))
        .collect();
    format!("{}, all", names.join(", "))
}
