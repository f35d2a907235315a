//! OpenBit browser-extension wallet connector.
//!
//! Adapts the OpenBit extension's request surface (`getAddresses`,
//! `sendTransfer`, `signPsbt`) to the [`connect_core::Connector`]
//! capability set. The extension handle itself is injected as an
//! [`OpenBitProvider`] value rather than read from a process-wide
//! singleton, so tests and embedders can substitute their own.

pub mod connector;
pub mod provider;

pub use connector::OpenBitConnector;
pub use provider::{
    Account, AddressList, AddressType, GetAddressesResult, OpenBitProvider, Recipient,
    SignIndex, SignPsbtRequest, SignPsbtResult, TransferRequest,
};
