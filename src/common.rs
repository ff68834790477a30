//! Wire and geometry types shared by the sampler, the dispatcher and the recorder.

mod point;
mod request;
mod response;

pub use point::*;
pub use request::*;
pub use response::*;
