pub mod prompt;
pub mod session;

pub use prompt::Console;
pub use session::run;
