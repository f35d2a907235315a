use thiserror::Error;

use crate::network::WalletNetwork;

/// Failure surfaced by a wallet bridge during a request/response cycle.
///
/// Provider implementations wrap whatever the extension rejected with;
/// the message crosses the connector boundary verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct BridgeError(pub String);

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        BridgeError(message.into())
    }
}

/// Connector operation errors.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// No candidate account satisfied the account-selection rule.
    #[error("failed to connect wallet: {0}")]
    Connection(String),

    /// A selected account's address does not belong to the configured network.
    #[error("invalid network: please switch to bitcoin {required}")]
    NetworkMismatch { required: WalletNetwork },

    /// An operation that needs an established session was called without one.
    #[error("no wallet session: {0}")]
    State(String),

    /// The provider or transport codec failed mid request/response.
    #[error("wallet bridge error: {0}")]
    Bridge(String),
}

impl From<BridgeError> for ConnectorError {
    fn from(e: BridgeError) -> Self {
        ConnectorError::Bridge(e.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_connection() {
        let err = ConnectorError::Connection("no matching account".into());
        assert_eq!(
            err.to_string(),
            "failed to connect wallet: no matching account"
        );
    }

    #[test]
    fn display_network_mismatch_names_required_network() {
        let err = ConnectorError::NetworkMismatch {
            required: WalletNetwork::Testnet,
        };
        assert_eq!(err.to_string(), "invalid network: please switch to bitcoin testnet");
    }

    #[test]
    fn display_state() {
        let err = ConnectorError::State("sign requested before connect".into());
        assert_eq!(
            err.to_string(),
            "no wallet session: sign requested before connect"
        );
    }

    #[test]
    fn bridge_message_survives_conversion() {
        let err: ConnectorError = BridgeError::new("user rejected the request").into();
        assert_eq!(
            err.to_string(),
            "wallet bridge error: user rejected the request"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(ConnectorError::Connection("test".into()));
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn debug_format_works() {
        let err = ConnectorError::Bridge("fail".into());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Bridge"));
    }
}
