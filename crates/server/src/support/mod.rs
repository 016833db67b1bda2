#![forbid(unsafe_code)]

mod args;
mod jsonrpc;
mod time;

pub(crate) use args::*;
pub(crate) use jsonrpc::*;
pub(crate) use time::*;
