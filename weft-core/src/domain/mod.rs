//! Domain layer: pure topology model and run rules, no I/O.

pub mod run;
pub mod topology;
pub mod transaction;

pub use topology::{LinkDeclaration, NodeDeclaration, Point, ResolvedLink, ResolvedNode, TopologyDeclaration, TopologyGraph};
pub use transaction::{ExecutedTransaction, ExecutionReport, PendingTransaction};
