use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an order within an exchange transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderRole {
    Buy,
    Sell,
}

impl fmt::Display for OrderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderRole::Buy => "buy",
            OrderRole::Sell => "sell",
        })
    }
}
