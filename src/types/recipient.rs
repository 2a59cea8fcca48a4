use std::fmt;

use serde::Serialize;

const ALIAS_PREFIX: &str = "alias:";

/// Recipient of a transfer or lease.
///
/// On the wire an alias is encoded as `alias:<chain id>:<name>`, anything
/// else is an address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Recipient {
    Address(String),
    Alias { chain_id: char, name: String },
}

impl Recipient {
    /// Normalize a wire-format recipient.
    pub fn parse(raw: &str) -> Self {
        raw.strip_prefix(ALIAS_PREFIX)
            .and_then(|rest| {
                let mut chars = rest.chars();
                let chain_id = chars.next()?;
                let name = chars.as_str().strip_prefix(':')?;
                (!name.is_empty()).then(|| Self::Alias {
                    chain_id,
                    name: name.to_string(),
                })
            })
            .unwrap_or_else(|| Self::Address(raw.to_string()))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias { .. })
    }

    /// Address or bare alias name, as displayed to users.
    pub fn short(&self) -> &str {
        match self {
            Self::Address(address) => address,
            Self::Alias { name, .. } => name,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => f.write_str(address),
            Self::Alias { chain_id, name } => write!(f, "{ALIAS_PREFIX}{chain_id}:{name}"),
        }
    }
}

impl Serialize for Recipient {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
