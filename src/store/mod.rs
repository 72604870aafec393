//! The node's key-value layout.
//!
//! Each module of the chain owns one named store; inside it, a one-byte tag
//! partitions the key space into substores. `keys` derives the exact hex keys.

pub mod keys;

/// Separator between an owner identifier and a sub-identifier.
pub const KEY_SEPARATOR: &str = "/";

pub const ACCOUNT_STORE: &str = "account";
pub const POST_STORE: &str = "post";
pub const VALIDATOR_STORE: &str = "validator";
pub const VOTE_STORE: &str = "vote";
pub const PROPOSAL_STORE: &str = "proposal";
pub const DEVELOPER_STORE: &str = "developer";
pub const INFRA_STORE: &str = "infra";
pub const PARAM_STORE: &str = "param";
pub const GLOBAL_STORE: &str = "global";
