pub mod auth;
pub mod cms;
pub mod common_models;
pub mod routes;
