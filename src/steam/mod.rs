//! 증기 물성 계약과 IF97 구현.

pub mod error;
pub mod if97;
pub mod oracle;

pub use error::{PropertyError, PropertyResult};
pub use if97::If97Steam;
pub use oracle::SteamPropertyOracle;
