use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use connect_core::{BridgeError, WalletNetwork};

/// Script-type category of an account exposed by the extension.
///
/// Wire tags match the extension's JSON exactly; anything it may add in
/// the future lands on `Unknown` rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressType {
    #[serde(rename = "p2tr")]
    P2tr,
    #[serde(rename = "p2wpkh")]
    P2wpkh,
    #[serde(rename = "p2sh")]
    P2sh,
    #[serde(rename = "ethereum")]
    Ethereum,
    #[serde(rename = "unknown")]
    Unknown,
}

impl<'de> Deserialize<'de> for AddressType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "p2tr" => AddressType::P2tr,
            "p2wpkh" => AddressType::P2wpkh,
            "p2sh" => AddressType::P2sh,
            "ethereum" => AddressType::Ethereum,
            _ => AddressType::Unknown,
        })
    }
}

/// One candidate account returned by `getAddresses`.
///
/// Owned by the provider; the connector only reads it. `is_testnet` is
/// frequently absent on mainnet accounts, which the selection logic
/// treats as `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweaked_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivation_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_testnet: Option<bool>,
    #[serde(rename = "type")]
    pub address_type: AddressType,
}

/// Response payload of the `getAddresses` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAddressesResult {
    pub result: AddressList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressList {
    pub addresses: Vec<Account>,
}

/// Input index selector for `signPsbt`: one index or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignIndex {
    Single(u32),
    Many(Vec<u32>),
}

impl From<u32> for SignIndex {
    fn from(index: u32) -> Self {
        SignIndex::Single(index)
    }
}

/// Parameters of the `signPsbt` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPsbtRequest {
    /// Hex transport form of the partially-signed transaction.
    pub psbt: String,
    /// Sighash types the signer is permitted to apply, if restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_sighash: Option<Vec<u32>>,
    pub sign_at_index: SignIndex,
    pub network: WalletNetwork,
    /// Address of the account that should sign.
    pub account: String,
    /// Whether the extension should finalize and broadcast. The
    /// connector always sends `false`; signing never broadcasts.
    pub broadcast: bool,
}

/// Response payload of the `signPsbt` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignPsbtResult {
    pub psbt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
}

/// A transfer recipient. `amount` is BTC as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub address: String,
    pub amount: String,
}

/// Parameters of the `sendTransfer` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Address of the paying account.
    pub account: String,
    pub recipients: Vec<Recipient>,
    pub network: WalletNetwork,
}

/// The OpenBit extension's request capability.
///
/// One method per wire operation. Any rejection comes back as a
/// [`BridgeError`] carrying the extension's message verbatim, and the
/// connector propagates it to its caller unchanged.
#[async_trait]
pub trait OpenBitProvider: Send + Sync {
    /// Whether the extension handle is currently bound in the host
    /// environment.
    fn is_bound(&self) -> bool;

    /// `getAddresses`: list the candidate accounts.
    async fn get_addresses(&self) -> Result<GetAddressesResult, BridgeError>;

    /// `sendTransfer`: submit a transfer. The result is whatever value
    /// the extension produced; its structure is not part of the contract.
    async fn send_transfer(
        &self,
        request: TransferRequest,
    ) -> Result<serde_json::Value, BridgeError>;

    /// `signPsbt`: cosign the requested input(s).
    async fn sign_psbt(&self, request: SignPsbtRequest) -> Result<SignPsbtResult, BridgeError>;
}
