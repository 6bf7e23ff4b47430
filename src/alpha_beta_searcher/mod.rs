//! Depth-limited alpha-beta search with a full visit trace.

mod score;
mod search;
mod trace;


pub use score::{Score, Window};
pub use search::{
    execute, SearchConfig, SearchError, SearchOutcome, SearchSession, SearchStats,
    DEFAULT_DEPTH_LIMIT, PASS_LIMIT,
};
pub use trace::{NodeLabel, Trace, TraceEntry};
