pub mod history;
pub mod resolver;
pub mod runner;
pub mod suggestion;
pub mod view;

pub use history::*;
pub use resolver::*;
pub use runner::*;
pub use suggestion::*;
pub use view::*;
