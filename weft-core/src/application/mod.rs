//! Application layer: orchestration across domain logic and infrastructure I/O.

pub mod configurator;
pub mod executor;
pub mod graph_builder;
pub mod lifecycle;

pub use configurator::{aggregate, configure, Configurator, SdkFactory};
pub use executor::TransactionExecutor;
pub use graph_builder::GraphBuilder;
pub use lifecycle::{CompositeObserver, LogObserver, NoopObserver, RunObserver};
