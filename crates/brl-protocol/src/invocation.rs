use brl_types::{Bond, Borders, Coordinates};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, ProtocolResult};

/// One call into the registry: an operation name plus positional string
/// arguments. This is the wire shape of both the mutating and the read-only
/// entry points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Invocation {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// The mutating operation table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOp {
    /// `create_bond`: all eleven bond fields, positionally.
    CreateBond(Bond),
    /// `transfer_bond`: rewrite a bond's owner.
    ///
    /// The historical dispatch string `tranfer_bond` [sic] is accepted as an
    /// alias; clients of the original deployment still send it.
    TransferBond {
        real_estate_id: String,
        new_owner_national_id: String,
    },
    /// `ping`: liveness probe.
    Ping,
}

/// The read-only operation table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOp {
    /// `get_bond_details`: fetch one encoded bond.
    GetBondDetails { real_estate_id: String },
    /// `check_unique_real_estate_id`: is the id free to use?
    CheckUniqueRealEstateId { real_estate_id: String },
    /// `get_bonds`: fetch every bond, in creation order.
    GetBonds,
    /// `get_ecert`: raw stored credential bytes for a name.
    GetEcert { name: String },
    /// `ping`: liveness probe.
    Ping,
}

/// Wire argument order of `create_bond`, fixed by the original deployment.
const CREATE_BOND_ARGS: usize = 11;

fn expect_args(function: &str, args: &[String], expected: usize) -> ProtocolResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ProtocolError::ArgumentCount {
            function: function.to_string(),
            expected,
            actual: args.len(),
        })
    }
}

impl MutationOp {
    /// Parse an invocation against the mutating table.
    ///
    /// Argument counts are validated here, before any store access; the
    /// registry never sees a malformed argument list.
    pub fn parse(invocation: &Invocation) -> ProtocolResult<Self> {
        let args = &invocation.args;
        match invocation.function.as_str() {
            "create_bond" => {
                expect_args("create_bond", args, CREATE_BOND_ARGS)?;
                Ok(Self::CreateBond(Bond {
                    id: args[0].clone(),
                    real_estate_id: args[1].clone(),
                    owner_national_id: args[2].clone(),
                    status: args[3].clone(),
                    area: args[4].clone(),
                    coordinates: Coordinates {
                        long: args[5].clone(),
                        lat: args[6].clone(),
                    },
                    borders: Borders {
                        north: args[7].clone(),
                        south: args[8].clone(),
                        east: args[9].clone(),
                        west: args[10].clone(),
                    },
                }))
            }
            name @ ("transfer_bond" | "tranfer_bond") => {
                expect_args(name, args, 2)?;
                Ok(Self::TransferBond {
                    real_estate_id: args[0].clone(),
                    new_owner_national_id: args[1].clone(),
                })
            }
            "ping" => {
                expect_args("ping", args, 0)?;
                Ok(Self::Ping)
            }
            other => Err(ProtocolError::UnknownOperation(other.to_string())),
        }
    }
}

impl QueryOp {
    /// Parse an invocation against the read-only table.
    pub fn parse(invocation: &Invocation) -> ProtocolResult<Self> {
        let args = &invocation.args;
        match invocation.function.as_str() {
            "get_bond_details" => {
                expect_args("get_bond_details", args, 1)?;
                Ok(Self::GetBondDetails {
                    real_estate_id: args[0].clone(),
                })
            }
            "check_unique_real_estate_id" => {
                expect_args("check_unique_real_estate_id", args, 1)?;
                Ok(Self::CheckUniqueRealEstateId {
                    real_estate_id: args[0].clone(),
                })
            }
            "get_bonds" => {
                expect_args("get_bonds", args, 0)?;
                Ok(Self::GetBonds)
            }
            "get_ecert" => {
                expect_args("get_ecert", args, 1)?;
                Ok(Self::GetEcert {
                    name: args[0].clone(),
                })
            }
            "ping" => {
                expect_args("ping", args, 0)?;
                Ok(Self::Ping)
            }
            other => Err(ProtocolError::UnknownOperation(other.to_string())),
        }
    }
}
