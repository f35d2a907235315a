use async_trait::async_trait;
use bitcoin::Psbt;

use crate::error::ConnectorError;

/// The capability set shared by interchangeable wallet connectors.
///
/// Each provider variant adapts one browser-extension wallet to this
/// contract. Methods take `&mut self`: a connector instance admits one
/// in-flight operation at a time, so two concurrent session selections
/// can never race to overwrite the cached account. Callers wanting
/// parallelism use one connector instance per task.
///
/// No method retries or times out internally; a provider call that
/// never resolves stalls the caller until it cancels at its own layer.
#[async_trait]
pub trait Connector {
    /// Whether the provider capability is currently present in the host
    /// environment. Observation only, idempotent, never touches the session.
    fn is_ready(&mut self) -> bool;

    /// Establish a session: query the provider for candidate accounts,
    /// select and validate one, and cache it. Re-running on an already
    /// connected instance re-selects from scratch. On any failure the
    /// previously cached session (if any) is left untouched.
    async fn connect(&mut self) -> Result<(), ConnectorError>;

    /// Send `amount` BTC to `to_address` via the provider's transfer
    /// operation, connecting first if no session exists yet.
    ///
    /// The provider's result is passed through opaquely; its documented
    /// shape (a transaction id) is not part of the provider contract,
    /// so this layer does not impose one.
    async fn send_to_address(
        &mut self,
        to_address: &str,
        amount: f64,
    ) -> Result<serde_json::Value, ConnectorError>;

    /// Ask the provider to cosign one input of `psbt`. Requires an
    /// established session; unlike [`send_to_address`], this does not
    /// auto-connect. The provider never finalizes or broadcasts here.
    ///
    /// [`send_to_address`]: Connector::send_to_address
    async fn sign_input(&mut self, input_index: u32, psbt: Psbt) -> Result<Psbt, ConnectorError>;
}
