pub mod app;
pub mod cli;
pub mod display;
pub mod error;
pub mod io;
pub mod logging;
pub mod metadata;
pub mod prelude;
pub mod report;
pub mod router;
pub mod session;
