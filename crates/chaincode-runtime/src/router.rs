//! # Chaincode Router
//!
//! Routes a parsed `Operation` to the contract that owns it and turns the
//! result into a host `Response`.

use crate::config::ChaincodeConfig;
use crate::errors::InvocationError;
use crate::invocation::Operation;
use cc_01_access_control::{AccessControlApi, AccessControlContract};
use cc_02_dispute_resolution::{DisputeContract, DisputeResolutionApi};
use cc_03_geo_store::{GeoStore, GeoStoreApi};
use chaincode_telemetry::{log_tx_event, record_invocation, InvocationTimer};
use shared_types::{codec, Classified, LedgerStub, Response};
use tracing::info_span;

/// Dispatches invocations to the three contracts.
#[derive(Debug, Clone, Default)]
pub struct ChaincodeRouter {
    acl: AccessControlContract,
    disputes: DisputeContract,
    geo: GeoStore,
}

impl ChaincodeRouter {
    /// Build the router from configuration.
    pub fn new(config: ChaincodeConfig) -> Self {
        Self {
            acl: AccessControlContract::new(),
            disputes: DisputeContract::new(config.disputes),
            geo: GeoStore::new(config.geo),
        }
    }

    /// Parse and run one invocation against `stub`.
    ///
    /// The stub must already be scoped to the operation's namespace; hosts
    /// that scope per invocation should parse first and call `dispatch`.
    pub fn invoke(&self, stub: &mut dyn LedgerStub, function: &str, args: Vec<String>) -> Response {
        match Operation::parse(function, args) {
            Ok(op) => self.dispatch(stub, op),
            Err(e) => self.reject(metric_label(function, &e), stub.tx_id(), &e),
        }
    }

    /// Run a parsed operation, recording metrics and logs.
    pub fn dispatch(&self, stub: &mut dyn LedgerStub, op: Operation) -> Response {
        let function = op.name();
        let span = info_span!("invoke", function, tx_id = %stub.tx_id());
        let _enter = span.enter();
        let _timer = InvocationTimer::start(function);

        match self.execute(stub, op) {
            Ok(payload) => {
                record_invocation(function, None);
                log_tx_event!(
                    debug,
                    function,
                    "Invocation succeeded",
                    stub.tx_id(),
                    payload_len = payload.len()
                );
                Response::success(payload)
            }
            Err(e) => self.reject(function, stub.tx_id(), &e),
        }
    }

    /// Build the error response for a failed invocation.
    pub fn reject(&self, function: &str, tx_id: &str, error: &InvocationError) -> Response {
        let kind = error.kind();
        record_invocation(function, Some(kind.as_str()));
        log_tx_event!(
            warn,
            function,
            "Invocation failed",
            tx_id,
            kind = kind.as_str(),
            error = %error
        );
        Response::error(kind, error.to_string())
    }

    /// Run the handler for `op` and produce the success payload.
    ///
    /// Writes go to `stub`; whether they are applied is the caller's
    /// decision.
    pub fn execute(
        &self,
        stub: &mut dyn LedgerStub,
        op: Operation,
    ) -> Result<Vec<u8>, InvocationError> {
        let payload = match op {
            Operation::Init => Vec::new(),
            Operation::AddAcl(params) => {
                self.acl.add_acl(stub, params)?;
                Vec::new()
            }
            Operation::UpdateAcl { id, qualifier } => {
                self.acl.update_acl(stub, &id, &qualifier)?;
                Vec::new()
            }
            Operation::GetAcl { id } => {
                let entry = self.acl.get_acl(stub, &id)?;
                codec::encode(&id, &entry)?
            }
            Operation::RaiseDispute(params) => {
                self.disputes.raise_dispute(stub, params)?;
                Vec::new()
            }
            Operation::RespondToDispute {
                dispute_id,
                response,
            } => {
                let caller = stub.caller_identity()?;
                self.disputes
                    .respond_to_dispute(stub, &caller, &dispute_id, &response)?;
                Vec::new()
            }
            Operation::ConfirmResolution { dispute_id } => {
                let caller = stub.caller_identity()?;
                self.disputes
                    .confirm_resolution(stub, &caller, &dispute_id)?;
                Vec::new()
            }
            Operation::GetDispute { dispute_id } => {
                let dispute = self.disputes.get_dispute(stub, &dispute_id)?;
                codec::encode(&dispute_id, &dispute)?
            }
            Operation::AddGeoJsonData {
                collection,
                key,
                geometry,
            } => {
                self.geo
                    .add_geojson_data(stub, &collection, &key, &geometry)?;
                Vec::new()
            }
            Operation::GetGeoJsonData { collection, key } => {
                self.geo.get_geojson_data(stub, &collection, &key)?
            }
        };
        Ok(payload)
    }
}

/// Function label for a rejected parse. Unknown names share one label.
pub fn metric_label<'a>(function: &'a str, error: &InvocationError) -> &'a str {
    match error {
        InvocationError::UnknownFunction(_) => "unknown",
        _ => function,
    }
}
