#![allow(warnings)]

pub mod apis;
pub mod arguments;
pub mod config;
pub mod errors; // Structured error handling
pub mod logger;
pub mod pairs;
pub mod rates; // Rate cache and provider trait
pub mod run;
pub mod signals; // Signal derivation from exchange rates
pub mod web_server;
