pub mod config;
pub mod controllers;
pub mod dtos;
pub mod entities;
pub mod errors;
pub mod extension;
pub mod models;
pub mod plugin;
pub mod services;
