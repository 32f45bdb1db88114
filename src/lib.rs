pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod locale;
pub mod models;
pub mod pipeline;
pub mod site;
pub mod templates_structs;
pub mod ua;
pub mod validate;
