// API routes and handlers

pub mod dashboard;
pub mod health;
pub mod routes;
