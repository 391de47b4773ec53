#![allow(dead_code)]

use crate::fixtures::builders::TopologyBuilder;
use crate::fixtures::constants::{TEST_DEFAULT_LIB, TEST_ENDPOINT_ROLE, TEST_NETWORK_ONE, TEST_NETWORK_TWO};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use weft_core::application::{Configurator, RunObserver, SdkFactory};
use weft_core::domain::{PendingTransaction, Point, TopologyDeclaration, TopologyGraph};
use weft_core::foundation::TxHash;
use weft_core::infrastructure::resolver::mock::StaticContractResolver;
use weft_core::Result;

pub fn endpoint_point(network: &str) -> Point {
    Point::new(network, TEST_ENDPOINT_ROLE)
}

pub fn test_address(point: &Point) -> String {
    format!("0x{}-{}", point.network, point.role)
}

/// The concrete two-node scenario: `A{net=1,role=endpoint}`,
/// `B{net=2,role=endpoint}`, one link `A->B` with `{defaultLib: "X"}`.
pub fn two_node_declaration() -> TopologyDeclaration<Value, Value> {
    let a = endpoint_point(TEST_NETWORK_ONE);
    let b = endpoint_point(TEST_NETWORK_TWO);
    TopologyBuilder::new().node(a.clone()).node(b.clone()).link(a, b, json!({ "defaultLib": TEST_DEFAULT_LIB })).build()
}

/// A contract resolver pre-populated with an address for every declared node.
pub fn resolver_for(declaration: &TopologyDeclaration<Value, Value>) -> StaticContractResolver {
    declaration
        .nodes
        .iter()
        .fold(StaticContractResolver::new(), |resolver, node| resolver.with_address(node.point.clone(), test_address(&node.point)))
}

/// SDK factory for configurators that never touch on-chain state.
pub struct NullSdkFactory;

#[async_trait]
impl SdkFactory for NullSdkFactory {
    type Sdk = ();

    async fn sdk_for(&self, _point: &Point) -> Result<()> {
        Ok(())
    }
}

/// Configurator double that returns a preset transaction batch regardless of
/// the graph contents.
pub struct StubConfigurator {
    transactions: Vec<PendingTransaction>,
}

impl StubConfigurator {
    pub fn returning(transactions: Vec<PendingTransaction>) -> Self {
        Self { transactions }
    }

    pub fn empty() -> Self {
        Self { transactions: Vec::new() }
    }
}

#[async_trait]
impl Configurator<Value, Value, ()> for StubConfigurator {
    async fn reconcile(&self, _graph: &TopologyGraph<Value, Value>, _factory: &dyn SdkFactory<Sdk = ()>) -> Result<Vec<PendingTransaction>> {
        Ok(self.transactions.clone())
    }
}

/// Observer that records every callback as one formatted line, preserving
/// emission order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }

    fn record(&self, line: String) {
        self.events.lock().expect("events lock").push(line);
    }
}

impl RunObserver for RecordingObserver {
    fn on_run_started(&self, transaction_count: usize) {
        self.record(format!("started count={transaction_count}"));
    }

    fn on_submitted(&self, point: &Point, description: &str, submission_hash: &TxHash) {
        self.record(format!("submitted point={point} description={description} hash={submission_hash}"));
    }

    fn on_confirmed(&self, point: &Point, description: &str, _submission_hash: &TxHash, confirmation_hash: &TxHash) {
        self.record(format!("confirmed point={point} description={description} hash={confirmation_hash}"));
    }

    fn on_failed(&self, point: &Point, description: &str, reason: &str) {
        self.record(format!("failed point={point} description={description} reason={reason}"));
    }

    fn on_run_completed(&self, confirmed_count: usize) {
        self.record(format!("completed count={confirmed_count}"));
    }
}
