use bitcoin::address::{Address, NetworkUnchecked};

use crate::network::WalletNetwork;

/// Validate a Bitcoin address string for the given network.
///
/// Supports P2PKH, P2SH, P2WPKH, P2WSH, and P2TR address formats.
/// Returns `true` only if the address parses and belongs to the
/// specified network; anything unparseable is invalid, not an error.
pub fn is_valid_address(network: WalletNetwork, address: &str) -> bool {
    match address.parse::<Address<NetworkUnchecked>>() {
        Ok(parsed) => parsed.is_valid_for_network(network.to_bitcoin_network()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::secp256k1::{Secp256k1, SecretKey};
    use bitcoin::Network;

    fn taproot_address(network: Network) -> String {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&[0x42; 32]).unwrap();
        let public_key = bitcoin::secp256k1::PublicKey::from_secret_key(&secp, &secret_key);
        let (xonly, _) = public_key.x_only_public_key();
        Address::p2tr(&secp, xonly, None, network).to_string()
    }

    #[test]
    fn valid_mainnet_p2wpkh() {
        // BIP-173 test vector.
        assert!(is_valid_address(
            WalletNetwork::Mainnet,
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
        ));
    }

    #[test]
    fn mainnet_address_invalid_on_testnet() {
        assert!(!is_valid_address(
            WalletNetwork::Testnet,
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
        ));
    }

    #[test]
    fn valid_mainnet_p2pkh() {
        // Satoshi's genesis coinbase address.
        assert!(is_valid_address(
            WalletNetwork::Mainnet,
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        ));
    }

    #[test]
    fn valid_mainnet_taproot() {
        let addr = taproot_address(Network::Bitcoin);
        assert!(addr.starts_with("bc1p"), "expected bc1p prefix, got {addr}");
        assert!(is_valid_address(WalletNetwork::Mainnet, &addr));
        assert!(!is_valid_address(WalletNetwork::Testnet, &addr));
    }

    #[test]
    fn valid_testnet_taproot() {
        let addr = taproot_address(Network::Testnet);
        assert!(addr.starts_with("tb1p"), "expected tb1p prefix, got {addr}");
        assert!(is_valid_address(WalletNetwork::Testnet, &addr));
        assert!(!is_valid_address(WalletNetwork::Mainnet, &addr));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(!is_valid_address(WalletNetwork::Mainnet, "notanaddress!!!"));
        assert!(!is_valid_address(WalletNetwork::Testnet, ""));
    }

    #[test]
    fn ethereum_address_is_invalid() {
        assert!(!is_valid_address(
            WalletNetwork::Mainnet,
            "0x000000000000000000000000000000000000dEaD",
        ));
    }
}
