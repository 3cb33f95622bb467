mod logger;
#[allow(unused_imports)]
pub use logger::*;

mod shared;
pub use shared::SharedRef;
