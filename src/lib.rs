pub mod api;
pub mod cli;
pub mod contract;
pub mod fetch;
pub mod model;
pub mod schema;
pub mod validate;
pub mod watch;
