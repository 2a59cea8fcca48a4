use fastnum::{
    UD128,
    decimal::{Context, RoundingMode},
};

use crate::error::NormalizeError;

/// Decimals of the matcher price scale every order price is multiplied by,
/// on top of the asset pair decimals spread.
pub const MATCHER_PRICE_DECIMALS: u8 = 8;

/// Largest number of significant digits an unsigned 128-bit decimal holds
/// without rounding.
const MAX_DIGITS: usize = 38;

/// Fixed-point to decimal converter.
///
/// Converts integer "coins" (raw on-chain amounts) into decimal "tokens"
/// (`coins / 10^decimals`) and back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Converter {
    decimals: i32,
}

impl Converter {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals: decimals as i32,
        }
    }

    /// Converter for raw matcher prices of an asset pair.
    ///
    /// Raw prices are scaled by `10^(8 + price_decimals - amount_decimals)`,
    /// the exponent is clamped at zero.
    pub fn matcher_price(amount_decimals: u8, price_decimals: u8) -> Self {
        let decimals =
            MATCHER_PRICE_DECIMALS as i32 + price_decimals as i32 - amount_decimals as i32;
        Self {
            decimals: decimals.max(0),
        }
    }

    pub fn decimals(&self) -> i32 {
        self.decimals
    }

    /// Coins to tokens.
    pub fn from_coins(&self, coins: UD128) -> UD128 {
        UD128::from_parts(coins.rescale(0).digits(), -self.decimals, context())
    }

    /// Tokens to coins, rounding toward zero when `tokens` carries more
    /// fractional digits than the converter.
    ///
    /// Returns `None` when the amount of coins would not fit into
    /// [`MAX_DIGITS`] digits.
    pub fn to_coins(&self, tokens: UD128) -> Option<UD128> {
        if tokens >= self.coins_limit() {
            return None;
        }
        let rescaled = tokens.with_ctx(context()).rescale(self.decimals as i16);
        Some(UD128::from_parts(rescaled.digits(), 0, context()))
    }

    /// Smallest amount of tokens worth `10^MAX_DIGITS` coins.
    fn coins_limit(&self) -> UD128 {
        UD128::from_parts(
            UD128::ONE.digits(),
            MAX_DIGITS as i32 - self.decimals,
            context(),
        )
    }
}

fn context() -> Context {
    Context::default().with_rounding_mode(RoundingMode::Floor)
}

/// Parses a string-encoded non-negative integer amount.
///
/// Signs, decimal points, whitespace and empty strings are rejected.
pub fn parse_coins(field: &'static str, raw: &str) -> Result<UD128, NormalizeError> {
    let malformed = || NormalizeError::MalformedNumericField {
        field,
        value: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if raw.trim_start_matches('0').len() > MAX_DIGITS {
        return Err(malformed());
    }

    UD128::from_str(raw, context())
        .map(|value| value.rescale(0))
        .map_err(|_| malformed())
}

/// Parses a string-encoded non-negative decimal token amount, e.g. `"12.5"`.
pub fn parse_tokens(field: &'static str, raw: &str) -> Result<UD128, NormalizeError> {
    let malformed = || NormalizeError::MalformedNumericField {
        field,
        value: raw.to_string(),
    };

    let (int, frac) = raw.split_once('.').unwrap_or((raw, ""));
    if int.is_empty() && frac.is_empty() {
        return Err(malformed());
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let significant = int.trim_start_matches('0').len() + frac.len();
    if significant > MAX_DIGITS {
        return Err(malformed());
    }

    UD128::from_str(raw, context()).map_err(|_| malformed())
}
