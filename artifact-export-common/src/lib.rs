#![deny(missing_docs, unsafe_code)]

//! Crate for common types shared between the `artifact-export` generator and
//! anything else that needs to read compiled contract artifacts or deployment
//! broadcast logs.

pub mod artifact;
pub mod broadcast;
pub mod errors;
pub mod network;

pub use crate::artifact::{ArtifactLoader, Contract};
pub use crate::broadcast::{Broadcast, BroadcastLoader, BroadcastTransaction};
pub use crate::network::NetworkId;
pub use serde_json::Value as Abi;
