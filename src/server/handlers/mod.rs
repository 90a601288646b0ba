pub mod status;
pub use status::status_handler;

pub mod algorithm_list;
pub use algorithm_list::algorithm_list_handler;

pub mod algorithm_run;
pub use algorithm_run::algorithm_run_handler;

// imports used by pretty much every handler
mod common;
