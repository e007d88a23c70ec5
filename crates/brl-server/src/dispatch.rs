use brl_protocol::{
    Invocation, MutationOp, OperationResponse, ProtocolResult, QueryOp, PING_PAYLOAD,
};
use brl_registry::BondRegistry;
use brl_store::KvStore;
use tracing::debug;

/// Maps parsed operations onto the registry and renders reply envelopes.
///
/// Parsing failures (unknown operation, arity mismatch) are returned as
/// `Err` so the transport can reject the call outright; registry failures
/// are rendered into the envelope's `error` field, message prefixed with the
/// operation that failed.
pub struct Dispatcher {
    registry: BondRegistry<Box<dyn KvStore>>,
}

impl Dispatcher {
    /// Build a dispatcher over any store backend.
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self {
            registry: BondRegistry::new(Box::new(store)),
        }
    }

    /// The registry this dispatcher drives.
    pub fn registry(&self) -> &BondRegistry<Box<dyn KvStore>> {
        &self.registry
    }

    /// Dispatch an invocation against the mutating table.
    pub fn invoke(&self, invocation: &Invocation) -> ProtocolResult<OperationResponse> {
        let op = MutationOp::parse(invocation)?;
        debug!(function = %invocation.function, "invoke");
        Ok(match op {
            MutationOp::CreateBond(bond) => match self.registry.create(&bond) {
                Ok(()) => OperationResponse::empty(),
                Err(e) => OperationResponse::error(format!("create_bond: {e}")),
            },
            MutationOp::TransferBond {
                real_estate_id,
                new_owner_national_id,
            } => match self
                .registry
                .transfer_ownership(&real_estate_id, &new_owner_national_id)
            {
                Ok(()) => OperationResponse::empty(),
                Err(e) => OperationResponse::error(format!("transfer_bond: {e}")),
            },
            MutationOp::Ping => OperationResponse::payload(PING_PAYLOAD),
        })
    }

    /// Dispatch an invocation against the read-only table.
    pub fn query(&self, invocation: &Invocation) -> ProtocolResult<OperationResponse> {
        let op = QueryOp::parse(invocation)?;
        debug!(function = %invocation.function, "query");
        Ok(match op {
            QueryOp::GetBondDetails { real_estate_id } => {
                match self.registry.retrieve(&real_estate_id) {
                    Ok(bond) => match serde_json::to_string(&bond) {
                        Ok(json) => OperationResponse::payload(json),
                        Err(e) => OperationResponse::error(format!("get_bond_details: {e}")),
                    },
                    Err(e) => OperationResponse::error(format!("get_bond_details: {e}")),
                }
            }
            QueryOp::CheckUniqueRealEstateId { real_estate_id } => {
                match self.registry.check_unique(&real_estate_id) {
                    // The verdict is the payload; for a taken id the error
                    // is explanatory commentary carried alongside it.
                    Ok(true) => OperationResponse::payload("true"),
                    Ok(false) => OperationResponse::payload_with_error(
                        "false",
                        format!("real-estate id {real_estate_id} is not unique"),
                    ),
                    Err(e) => {
                        OperationResponse::error(format!("check_unique_real_estate_id: {e}"))
                    }
                }
            }
            QueryOp::GetBonds => match self.registry.list_all() {
                // Compact JSON array: `[` + comma-joined encoded bonds + `]`,
                // `[]` when empty.
                Ok(bonds) => match serde_json::to_string(&bonds) {
                    Ok(json) => OperationResponse::payload(json),
                    Err(e) => OperationResponse::error(format!("get_bonds: {e}")),
                },
                Err(e) => OperationResponse::error(format!("get_bonds: {e}")),
            },
            QueryOp::GetEcert { name } => match self.registry.get_credential(&name) {
                // The envelope is text; a credential that is not valid UTF-8
                // cannot be passed through byte-faithfully, so it is refused
                // rather than silently rewritten with replacement characters.
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => OperationResponse::payload(text),
                    Err(_) => OperationResponse::error(format!(
                        "get_ecert: credential for {name} is not valid UTF-8"
                    )),
                },
                Err(e) => OperationResponse::error(format!("get_ecert: {e}")),
            },
            QueryOp::Ping => OperationResponse::payload(PING_PAYLOAD),
        })
    }
}

#[cfg(test)]
mod tests {
    use brl_protocol::ProtocolError;
    use brl_store::InMemoryKvStore;
    use brl_types::Bond;

    use super::*;

    fn dispatcher() -> Dispatcher {
        let d = Dispatcher::new(InMemoryKvStore::new());
        d.registry().bootstrap().unwrap();
        d
    }

    fn invocation(function: &str, args: &[&str]) -> Invocation {
        Invocation {
            function: function.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn create_100_1(d: &Dispatcher) -> OperationResponse {
        d.invoke(&invocation(
            "create_bond",
            &[
                "b1", "100.1", "n1", "built", "50", "10", "20", "n", "s", "e", "w",
            ],
        ))
        .unwrap()
    }

    #[test]
    fn full_lifecycle_scenario() {
        let d = dispatcher();

        assert!(!create_100_1(&d).is_err());

        let details = d
            .query(&invocation("get_bond_details", &["100.1"]))
            .unwrap();
        let bond: Bond = serde_json::from_str(details.payload.as_deref().unwrap()).unwrap();
        assert_eq!(bond.real_estate_id, "100.1");
        assert_eq!(bond.owner_national_id, "n1");
        assert_eq!(bond.status, "built");

        let transfer = d
            .invoke(&invocation("transfer_bond", &["100.1", "n2"]))
            .unwrap();
        assert!(!transfer.is_err());

        let details = d
            .query(&invocation("get_bond_details", &["100.1"]))
            .unwrap();
        let bond: Bond = serde_json::from_str(details.payload.as_deref().unwrap()).unwrap();
        assert_eq!(bond.owner_national_id, "n2");

        let taken = d
            .query(&invocation("check_unique_real_estate_id", &["100.1"]))
            .unwrap();
        assert_eq!(taken.payload.as_deref(), Some("false"));
        assert!(taken.is_err());

        let free = d
            .query(&invocation("check_unique_real_estate_id", &["999.9"]))
            .unwrap();
        assert_eq!(free.payload.as_deref(), Some("true"));
        assert!(!free.is_err());
    }

    #[test]
    fn duplicate_create_reports_error_in_envelope() {
        let d = dispatcher();
        create_100_1(&d);
        let resp = create_100_1(&d);
        let message = resp.error.unwrap();
        assert!(message.contains("create_bond"));
        assert!(message.contains("100.1"));
    }

    #[test]
    fn transfer_of_missing_bond_fails_whole_call() {
        let d = dispatcher();
        let resp = d
            .invoke(&invocation("transfer_bond", &["999.9", "n2"]))
            .unwrap();
        let message = resp.error.unwrap();
        assert!(message.contains("transfer_bond"));
        assert!(message.contains("999.9"));
    }

    #[test]
    fn get_bonds_renders_bracketed_comma_joined_list() {
        let d = dispatcher();
        let empty = d.query(&invocation("get_bonds", &[])).unwrap();
        assert_eq!(empty.payload.as_deref(), Some("[]"));

        create_100_1(&d);
        d.invoke(&invocation(
            "create_bond",
            &[
                "b2", "100.2", "n9", "flat", "70", "11", "21", "n", "s", "e", "w",
            ],
        ))
        .unwrap();

        let listed = d.query(&invocation("get_bonds", &[])).unwrap();
        let payload = listed.payload.unwrap();
        assert!(payload.starts_with('['));
        assert!(payload.ends_with(']'));
        let bonds: Vec<Bond> = serde_json::from_str(&payload).unwrap();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0].real_estate_id, "100.1");
        assert_eq!(bonds[1].real_estate_id, "100.2");
    }

    #[test]
    fn get_ecert_returns_raw_stored_bytes() {
        let d = dispatcher();
        d.registry()
            .put_credential("alice", b"-----CERT-----")
            .unwrap();
        let resp = d.query(&invocation("get_ecert", &["alice"])).unwrap();
        assert_eq!(resp.payload.as_deref(), Some("-----CERT-----"));

        let missing = d.query(&invocation("get_ecert", &["bob"])).unwrap();
        assert!(missing.is_err());
    }

    #[test]
    fn get_ecert_refuses_non_utf8_credentials_instead_of_mangling() {
        let d = dispatcher();
        d.registry()
            .put_credential("mallory", &[0xff, 0xfe, 0x00])
            .unwrap();
        let resp = d.query(&invocation("get_ecert", &["mallory"])).unwrap();
        assert!(resp.payload.is_none());
        let message = resp.error.unwrap();
        assert!(message.contains("mallory"));
        assert!(message.contains("UTF-8"));
    }

    #[test]
    fn ping_answers_the_fixed_greeting_on_both_tables() {
        let d = dispatcher();
        let via_invoke = d.invoke(&invocation("ping", &[])).unwrap();
        assert_eq!(via_invoke.payload.as_deref(), Some(PING_PAYLOAD));
        let via_query = d.query(&invocation("ping", &[])).unwrap();
        assert_eq!(via_query.payload.as_deref(), Some(PING_PAYLOAD));
    }

    #[test]
    fn parse_failures_surface_as_errors_not_envelopes() {
        let d = dispatcher();
        assert_eq!(
            d.invoke(&invocation("no_such_op", &[])).unwrap_err(),
            ProtocolError::UnknownOperation("no_such_op".into())
        );
        assert!(matches!(
            d.query(&invocation("get_bond_details", &[])).unwrap_err(),
            ProtocolError::ArgumentCount { .. }
        ));
    }

    #[test]
    fn legacy_transfer_spelling_dispatches() {
        let d = dispatcher();
        create_100_1(&d);
        let resp = d
            .invoke(&invocation("tranfer_bond", &["100.1", "n7"]))
            .unwrap();
        assert!(!resp.is_err());
        let bond = d.registry().retrieve("100.1").unwrap();
        assert_eq!(bond.owner_national_id, "n7");
    }
}
