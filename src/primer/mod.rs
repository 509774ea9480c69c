mod batch;
mod error;
mod fasta;
mod finder;
mod report;
mod sequence;
mod session;
mod types;

pub use batch::*;
pub use error::*;
pub use fasta::*;
pub use finder::*;
pub use report::*;
pub use sequence::*;
pub use session::*;
pub use types::*;
