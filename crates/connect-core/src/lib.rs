//! Provider-independent contract for Bitcoin wallet connectors.
//!
//! A connector adapts one browser-extension signing provider to a common
//! capability set: connect, report readiness, send funds, cosign a PSBT
//! input. This crate holds everything the provider variants share: the
//! network enum, address validation, the PSBT transport codec, the error
//! taxonomy, and the [`Connector`] trait itself.

pub mod address;
pub mod connector;
pub mod error;
pub mod network;
pub mod psbt;

pub use connector::Connector;
pub use error::{BridgeError, ConnectorError};
pub use network::WalletNetwork;
