pub mod config;
pub mod models;
pub mod openapi;
pub mod presentation;
pub mod routes;
pub mod template;
pub mod validation;
