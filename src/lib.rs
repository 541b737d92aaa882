//! An ELIZA-like console oracle (en.wikipedia.org/wiki/ELIZA).
//!
//! Questions typed at the terminal are answered after a random delay by
//! [`responder::respond`]; unsolicited [`prophecy`] messages arrive on their
//! own schedule. Everything funnels through a single [`output`] sink that
//! prints one character at a time, so answers and prophecies never garble
//! each other. [`oracle::Oracle`] wires the whole thing together.

pub mod banner;
pub mod consts;
pub mod oracle;
pub mod output;
pub mod prophecy;
pub mod responder;
