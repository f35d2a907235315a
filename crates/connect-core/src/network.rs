use bitcoin::Network;
use serde::{Deserialize, Serialize};

/// Networks a connector session can be configured for.
///
/// Fixed at connector construction and immutable for the lifetime of the
/// session. Serializes to the lowercase names the extension wire format
/// uses (`"mainnet"` / `"testnet"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletNetwork {
    Mainnet,
    Testnet,
}

impl WalletNetwork {
    /// Convert to the `bitcoin` crate's `Network` type.
    pub fn to_bitcoin_network(self) -> Network {
        match self {
            WalletNetwork::Mainnet => Network::Bitcoin,
            WalletNetwork::Testnet => Network::Testnet,
        }
    }

    /// Whether this is the testnet variant.
    pub fn is_testnet(self) -> bool {
        matches!(self, WalletNetwork::Testnet)
    }
}

impl std::fmt::Display for WalletNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletNetwork::Mainnet => write!(f, "mainnet"),
            WalletNetwork::Testnet => write!(f, "testnet"),
        }
    }
}
