//! Pipeline stages
//!
//! Each stage is a pure function over the previous stage's output:
//! segment → classify → synthesize → rank → bound → summarize → assemble.

pub mod assemble;
pub mod bound;
pub mod classify;
pub mod rank;
pub mod segment;
pub mod summarize;
pub mod synthesize;

pub use assemble::{assemble, validate};
pub use bound::bound;
pub use classify::classify;
pub use rank::rank;
pub use segment::segment;
pub use summarize::summarize;
pub use synthesize::synthesize;
