pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use session_rng::SessionRng;
pub use tictactoe::*;
