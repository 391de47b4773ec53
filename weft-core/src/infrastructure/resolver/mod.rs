pub mod mock;
pub mod traits;

pub use traits::{ContractResolver, Signer, SignerResolver, SubmittedTransaction};
