//! # Operations
//!
//! Every invocation is parsed exactly once into an `Operation`. Handlers
//! receive typed arguments and never look at the function name again.

use crate::errors::InvocationError;
use cc_01_access_control::AclParams;
use cc_02_dispute_resolution::RaiseParams;

/// Namespace of the empty `Init` transaction.
pub const LIFECYCLE_NAMESPACE: &str = "lscc";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Instantiation hook. Touches no state.
    Init,
    /// `AddACL(id, identity, identifier, qualifier, validity)`
    AddAcl(AclParams),
    /// `UpdateACL(id, qualifier)`
    UpdateAcl {
        /// Entry id
        id: String,
        /// New qualifier
        qualifier: String,
    },
    /// `GetACL(id)`
    GetAcl {
        /// Entry id
        id: String,
    },
    /// `RaiseDispute(disputeID, raiser, defendant, description)`
    RaiseDispute(RaiseParams),
    /// `RespondToDispute(disputeID, response)`
    RespondToDispute {
        /// Dispute id
        dispute_id: String,
        /// Defendant's answer
        response: String,
    },
    /// `ConfirmResolution(disputeID)`
    ConfirmResolution {
        /// Dispute id
        dispute_id: String,
    },
    /// `GetDispute(disputeID)`
    GetDispute {
        /// Dispute id
        dispute_id: String,
    },
    /// `AddGeoJSONData(collection, key, geometryPayload)`
    AddGeoJsonData {
        /// Private collection
        collection: String,
        /// Key in the collection
        key: String,
        /// Raw JSON geometry
        geometry: String,
    },
    /// `GetGeoJSONData(collection, key)`
    GetGeoJsonData {
        /// Private collection
        collection: String,
        /// Key in the collection
        key: String,
    },
}

/// Split `args` into exactly `N` values.
fn take<const N: usize>(args: Vec<String>) -> Result<[String; N], InvocationError> {
    <[String; N]>::try_from(args).map_err(|args| InvocationError::ArgumentCount {
        expected: N,
        got: args.len(),
    })
}

impl Operation {
    /// Resolve a function name and its arguments.
    pub fn parse(function: &str, args: Vec<String>) -> Result<Self, InvocationError> {
        let op = match function {
            // Instantiation arguments are accepted and ignored
            "Init" => Self::Init,
            "AddACL" => {
                let [id, identity, identifier, qualifier, validity] = take::<5>(args)?;
                Self::AddAcl(AclParams {
                    id,
                    identity,
                    identifier,
                    qualifier,
                    validity,
                })
            }
            "UpdateACL" => {
                let [id, qualifier] = take::<2>(args)?;
                Self::UpdateAcl { id, qualifier }
            }
            "GetACL" => {
                let [id] = take::<1>(args)?;
                Self::GetAcl { id }
            }
            "RaiseDispute" => {
                let [dispute_id, raiser, defendant, description] = take::<4>(args)?;
                Self::RaiseDispute(RaiseParams {
                    dispute_id,
                    raiser,
                    defendant,
                    description,
                })
            }
            "RespondToDispute" => {
                let [dispute_id, response] = take::<2>(args)?;
                Self::RespondToDispute {
                    dispute_id,
                    response,
                }
            }
            "ConfirmResolution" => {
                let [dispute_id] = take::<1>(args)?;
                Self::ConfirmResolution { dispute_id }
            }
            "GetDispute" => {
                let [dispute_id] = take::<1>(args)?;
                Self::GetDispute { dispute_id }
            }
            "AddGeoJSONData" | "addGeoJSONData" => {
                let [collection, key, geometry] = take::<3>(args)?;
                Self::AddGeoJsonData {
                    collection,
                    key,
                    geometry,
                }
            }
            "GetGeoJSONData" | "getGeoJSONData" => {
                let [collection, key] = take::<2>(args)?;
                Self::GetGeoJsonData { collection, key }
            }
            other => return Err(InvocationError::UnknownFunction(other.to_string())),
        };
        Ok(op)
    }

    /// Canonical function name, used for logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::AddAcl(_) => "AddACL",
            Self::UpdateAcl { .. } => "UpdateACL",
            Self::GetAcl { .. } => "GetACL",
            Self::RaiseDispute(_) => "RaiseDispute",
            Self::RespondToDispute { .. } => "RespondToDispute",
            Self::ConfirmResolution { .. } => "ConfirmResolution",
            Self::GetDispute { .. } => "GetDispute",
            Self::AddGeoJsonData { .. } => "AddGeoJSONData",
            Self::GetGeoJsonData { .. } => "GetGeoJSONData",
        }
    }

    /// Ledger namespace of the contract that owns the operation.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Init => LIFECYCLE_NAMESPACE,
            Self::AddAcl(_) | Self::UpdateAcl { .. } | Self::GetAcl { .. } => {
                cc_01_access_control::NAMESPACE
            }
            Self::RaiseDispute(_)
            | Self::RespondToDispute { .. }
            | Self::ConfirmResolution { .. }
            | Self::GetDispute { .. } => cc_02_dispute_resolution::NAMESPACE,
            Self::AddGeoJsonData { .. } | Self::GetGeoJsonData { .. } => {
                cc_03_geo_store::NAMESPACE
            }
        }
    }
}
