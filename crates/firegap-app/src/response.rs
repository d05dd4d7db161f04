use anyhow::Context;
use firegap_types::ClearanceResponse;

/// Pretty JSON with a trailing newline.
pub fn serialize_response(response: &ClearanceResponse) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(response).context("serialize clearance response")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn parse_response_json(text: &str) -> anyhow::Result<ClearanceResponse> {
    serde_json::from_str(text).context("parse clearance response JSON")
}
