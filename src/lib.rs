//! tui-cyberfolio (workspace facade crate).
//!
//! This package keeps a stable `tui_cyberfolio::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_cyberfolio_core as core;
pub use tui_cyberfolio_engine as engine;
pub use tui_cyberfolio_input as input;
pub use tui_cyberfolio_term as term;
pub use tui_cyberfolio_types as types;
