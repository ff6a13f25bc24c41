//! Completion stages: classify the cursor token, walk the property chain, resolve its root and
//! gather candidates.

pub(crate) mod assignment;
mod chain;
mod classify;
mod gather;
pub(crate) mod resolve;
pub(crate) mod vocabulary;

pub(crate) use chain::walk_chain;
pub(crate) use classify::{classify, is_word};
pub(crate) use gather::{Candidates, gather_members, gather_scope};
pub(crate) use resolve::resolve_chain;
