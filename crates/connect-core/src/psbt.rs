use bitcoin::Psbt;

use crate::error::ConnectorError;

/// Encode a PSBT into the hex transport form the extension wire speaks.
pub fn encode_psbt(psbt: &Psbt) -> String {
    hex::encode(psbt.serialize())
}

/// Decode a PSBT from its hex transport form.
///
/// Used on provider responses, so failures surface as bridge errors:
/// a provider that returns something undecodable is indistinguishable
/// from one that rejected the request outright.
pub fn decode_psbt(raw: &str) -> Result<Psbt, ConnectorError> {
    let bytes = hex::decode(raw)
        .map_err(|e| ConnectorError::Bridge(format!("malformed psbt response: {e}")))?;
    Psbt::deserialize(&bytes)
        .map_err(|e| ConnectorError::Bridge(format!("malformed psbt response: {e}")))
}
