pub mod classify;
pub mod client;
pub mod complaint;
pub mod config;
pub mod db;
pub mod department;
pub mod environment;
pub mod errors;
pub mod intake;
pub mod language;
pub mod normalization;
pub mod routes;
pub mod urls;
