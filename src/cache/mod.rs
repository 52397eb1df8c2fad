//! Result cache: TTL memoization with a fail-open contract
//!
//! Analysis results are memoized per (operation, arguments) key. The cache is
//! strictly an accelerator: any backend failure — read or write — degrades to
//! direct computation and is never surfaced to the caller.

mod key;
mod memo;
mod memory;
mod traits;

pub use key::CacheKey;
pub use memo::{ResultCache, DEFAULT_TTL};
pub use memory::MemoryCache;
pub use traits::{CacheBackend, CacheError, CacheResult};
