//! ICS-20: fungible token transfer messages and the packet payload the
//! relayer reconstructs client-side.

pub mod msgs;

use flex_error::define_error;

use crate::proto::cosmos::Coin;

define_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    Error {
        InvalidCoin
            { coin: String }
            |e| { format!("invalid coin expression: {}", e.coin) },
    }
}

/// Parses a coin expression of the form `100stake` into its amount and
/// denomination parts.
pub fn parse_coin(s: &str) -> Result<Coin, Error> {
    let split = s.find(|c: char| !c.is_ascii_digit());

    match split {
        Some(0) | None => Err(Error::invalid_coin(s.to_string())),
        Some(idx) => {
            let (amount, denom) = s.split_at(idx);
            Ok(Coin {
                denom: denom.to_string(),
                amount: amount.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_coin;

    #[test]
    fn parses_amount_and_denom() {
        let coin = parse_coin("100stake").unwrap();
        assert_eq!(coin.amount, "100");
        assert_eq!(coin.denom, "stake");
    }

    #[test]
    fn parses_path_prefixed_denom() {
        let coin = parse_coin("25transfer/channeltoa/stake").unwrap();
        assert_eq!(coin.amount, "25");
        assert_eq!(coin.denom, "transfer/channeltoa/stake");
    }

    #[test]
    fn rejects_denom_only_and_amount_only() {
        assert!(parse_coin("stake").is_err());
        assert!(parse_coin("100").is_err());
        assert!(parse_coin("").is_err());
    }
}
