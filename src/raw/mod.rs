mod arena;
mod handle;
mod node;
mod raw_chain_set;

pub(crate) use handle::Handle;
pub(crate) use raw_chain_set::RawChainSet;
