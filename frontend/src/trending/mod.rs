pub mod api;
pub mod components;
pub mod controller;
pub mod filters;
