use serde::Deserialize;

use super::params::Params;
use super::wire::WireDecimal;

#[derive(Debug, Clone, Deserialize)]
struct AccountJsonResponse {
    balance: WireDecimal,
}

pub fn encode_account_params() -> Params {
    Params::new()
}

pub fn decode_account_json_response(body: &[u8]) -> Result<f64, serde_json::Error> {
    let parsed: AccountJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed.balance.0)
}
