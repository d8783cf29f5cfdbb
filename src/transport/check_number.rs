use std::collections::BTreeMap;

use serde::Deserialize;

use super::params::Params;
use super::wire::{WireDecimal, decode_numeric_keyed};
use crate::domain::{JOIN_SEPARATOR, Msisdn, NumberInfo, join_u64};

#[derive(Debug, Clone, Deserialize)]
struct NumberJson {
    price: WireDecimal,
    #[serde(default)]
    country: String,
}

pub fn encode_phone_list(numbers: &[Msisdn]) -> String {
    let raw: Vec<u64> = numbers.iter().map(|n| n.value()).collect();
    join_u64(&raw, JOIN_SEPARATOR)
}

pub fn encode_check_number_params(numbers: &[Msisdn]) -> Params {
    Params::new().with(Msisdn::FIELD, encode_phone_list(numbers))
}

/// Decode one batch of number lookups. Keys that are not decimal numbers are skipped.
pub fn decode_check_number_json_response(
    body: &[u8],
) -> Result<BTreeMap<Msisdn, NumberInfo>, serde_json::Error> {
    let parsed = serde_json::from_slice(body)?;
    let entries: Vec<(u64, NumberJson)> = decode_numeric_keyed(parsed, "number info")?;

    Ok(entries
        .into_iter()
        .map(|(number, value)| {
            (
                Msisdn::new(number),
                NumberInfo {
                    price: value.price.0,
                    country: value.country,
                },
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_numbers() {
        let params = encode_check_number_params(&[
            Msisdn::new(447_624_800_500),
            Msisdn::new(37_122_345_678),
        ]);
        assert_eq!(params.get("phone"), Some("447624800500,37122345678"));
    }

    #[test]
    fn decode_maps_numbers_and_skips_garbage_keys() {
        let json = br#"
        {
          "447624800500": {"price": 1, "country": "GB"},
          "37122345678": {"price": "1.5", "country": "LV"},
          "+44": {"price": 1, "country": "GB"}
        }
        "#;

        let numbers = decode_check_number_json_response(json).unwrap();
        assert_eq!(numbers.len(), 2);
        assert_eq!(
            numbers[&Msisdn::new(447_624_800_500)],
            NumberInfo {
                price: 1.0,
                country: "GB".to_owned()
            }
        );
        assert_eq!(numbers[&Msisdn::new(37_122_345_678)].price, 1.5);
    }

    #[test]
    fn decode_ignores_zero_error_code_member() {
        let json = br#"{"error_code": 0, "447624800500": {"price": 1, "country": "GB"}}"#;
        let numbers = decode_check_number_json_response(json).unwrap();
        assert_eq!(
            numbers.keys().copied().collect::<Vec<_>>(),
            vec![Msisdn::new(447_624_800_500)]
        );
    }
}
