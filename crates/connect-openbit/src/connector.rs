use async_trait::async_trait;
use bitcoin::Psbt;
use log::{debug, warn};

use connect_core::address::is_valid_address;
use connect_core::psbt::{decode_psbt, encode_psbt};
use connect_core::{Connector, ConnectorError, WalletNetwork};

use crate::provider::{
    AddressType, OpenBitProvider, Recipient, SignPsbtRequest, TransferRequest,
};

/// Connector identifier used by registries and UI layers.
pub const CONNECTOR_ID: &str = "openbit";

/// Human-readable wallet name.
pub const CONNECTOR_NAME: &str = "OpenBit";

/// Wallet documentation homepage.
pub const CONNECTOR_HOMEPAGE: &str = "https://docs.openbit.app/";

/// Session-holding adapter from the OpenBit extension to the common
/// [`Connector`] contract.
///
/// Holds at most one selected account. `address`/`public_key` are set
/// together by a fully successful [`Connector::connect`] and by nothing
/// else; failed connects leave whatever session existed before intact.
pub struct OpenBitConnector<P> {
    provider: P,
    network: WalletNetwork,
    address: Option<String>,
    public_key: Option<String>,
    ready: bool,
}

impl<P> OpenBitConnector<P> {
    /// Create a disconnected connector for `network`, addressing the
    /// given extension handle.
    pub fn new(network: WalletNetwork, provider: P) -> Self {
        OpenBitConnector {
            provider,
            network,
            address: None,
            public_key: None,
            ready: false,
        }
    }

    /// The network this session was configured for.
    pub fn network(&self) -> WalletNetwork {
        self.network
    }

    /// Address of the selected account, once connected.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Public key paired with [`address`](OpenBitConnector::address).
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn id(&self) -> &'static str {
        CONNECTOR_ID
    }

    pub fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    pub fn homepage(&self) -> &'static str {
        CONNECTOR_HOMEPAGE
    }
}

#[async_trait]
impl<P: OpenBitProvider> Connector for OpenBitConnector<P> {
    fn is_ready(&mut self) -> bool {
        self.ready = self.provider.is_bound();
        self.ready
    }

    async fn connect(&mut self) -> Result<(), ConnectorError> {
        let response = self.provider.get_addresses().await?;
        let wants_testnet = self.network.is_testnet();

        // First taproot account whose testnet flag matches the session
        // network. An absent flag means mainnet.
        let account = response
            .result
            .addresses
            .into_iter()
            .find(|a| {
                a.address_type == AddressType::P2tr
                    && a.is_testnet.unwrap_or(false) == wants_testnet
            })
            .ok_or_else(|| ConnectorError::Connection("no matching account".into()))?;

        if !is_valid_address(self.network, &account.address) {
            warn!(
                "openbit account {} failed validation for {}",
                account.address, self.network
            );
            return Err(ConnectorError::NetworkMismatch {
                required: self.network,
            });
        }

        debug!("openbit session established for {}", account.address);
        self.address = Some(account.address);
        self.public_key = account.public_key;
        Ok(())
    }

    async fn send_to_address(
        &mut self,
        to_address: &str,
        amount: f64,
    ) -> Result<serde_json::Value, ConnectorError> {
        if self.address.is_none() {
            self.connect().await?;
        }

        let account = self
            .address
            .clone()
            .ok_or_else(|| ConnectorError::State("no account after connect".into()))?;

        let request = TransferRequest {
            account,
            recipients: vec![Recipient {
                address: to_address.to_string(),
                amount: amount.to_string(),
            }],
            network: self.network,
        };

        Ok(self.provider.send_transfer(request).await?)
    }

    async fn sign_input(&mut self, input_index: u32, psbt: Psbt) -> Result<Psbt, ConnectorError> {
        // Deliberately no auto-connect: a signing request against a
        // disconnected session is a caller bug, not a prompt to pop up
        // the wallet.
        let account = self
            .address
            .clone()
            .ok_or_else(|| ConnectorError::State("sign requested before connect".into()))?;

        let request = SignPsbtRequest {
            psbt: encode_psbt(&psbt),
            allowed_sighash: None,
            sign_at_index: input_index.into(),
            network: self.network,
            account,
            broadcast: false,
        };

        let response = self.provider.sign_psbt(request).await?;
        decode_psbt(&response.psbt)
    }
}
