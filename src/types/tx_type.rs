/// Transaction types the normalizer knows about.
///
/// Any other type code is passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxType {
    /// Pre-asset payment, always denominated in the native asset.
    LegacySend,
    Issue,
    Transfer,
    Reissue,
    Burn,
    Exchange,
    Lease,
    CancelLease,
    CreateAlias,
    MassTransfer,
}

impl TxType {
    pub fn from_code(code: u64) -> Option<Self> {
        Some(match code {
            2 => TxType::LegacySend,
            3 => TxType::Issue,
            4 => TxType::Transfer,
            5 => TxType::Reissue,
            6 => TxType::Burn,
            7 => TxType::Exchange,
            8 => TxType::Lease,
            9 => TxType::CancelLease,
            10 => TxType::CreateAlias,
            11 => TxType::MassTransfer,
            _ => return None,
        })
    }

    pub fn code(&self) -> u8 {
        match self {
            TxType::LegacySend => 2,
            TxType::Issue => 3,
            TxType::Transfer => 4,
            TxType::Reissue => 5,
            TxType::Burn => 6,
            TxType::Exchange => 7,
            TxType::Lease => 8,
            TxType::CancelLease => 9,
            TxType::CreateAlias => 10,
            TxType::MassTransfer => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        for code in 2..=11 {
            let tx_type = TxType::from_code(code).unwrap();
            assert_eq!(tx_type.code() as u64, code);
        }
        assert_eq!(TxType::from_code(1), None);
        assert_eq!(TxType::from_code(12), None);
        assert_eq!(TxType::from_code(16), None);
    }
}
