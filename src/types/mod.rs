//! Decoded mirrors of on-chain state.
//!
//! Read-only: values come from the node through the amount rescale pass, so
//! every `Coin` is already in LNO. Parameter records double as message payloads.

pub mod account;
pub mod common;
pub mod global;
pub mod param;
pub mod post;
pub mod validator;

pub use account::*;
pub use common::{Coin, IdToUrlMapping, ResultKv};
pub use global::*;
pub use param::*;
pub use post::*;
pub use validator::*;
