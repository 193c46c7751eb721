pub mod cms_handlers;
pub mod cms_models;
