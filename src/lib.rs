pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod rating;
pub mod storage;
pub mod wordlist;

pub use crate::core::{cyrillic_to_lacinka, lacinka_to_cyrillic};
pub use error::{Error, Result};
pub use wordlist::{merge_ask_accept, AskAcceptLists, WordBucket};
