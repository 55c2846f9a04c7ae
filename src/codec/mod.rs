mod decode;
mod encode;
mod types;

pub(crate) use decode::decode;
pub(crate) use encode::encode;
pub(crate) use types::{Entry, Fragment};
