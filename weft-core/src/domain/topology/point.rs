use crate::foundation::{ContractRole, NetworkId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical identity of a single on-chain entity: which network it lives on
/// and which contract role it plays there. Independent of its resolved
/// address; equality is by value so a `Point` doubles as a map key and as a
/// graph node identity.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Point {
    pub network: NetworkId,
    pub role: ContractRole,
}

impl Point {
    pub fn new(network: impl Into<NetworkId>, role: impl Into<ContractRole>) -> Self {
        Self { network: network.into(), role: role.into() }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.network, self.role)
    }
}
