//! Shared contracts for IoT edge microservices: domain models, wire DTOs with
//! their validation rules, request/response envelopes and blocking REST
//! clients for the core and support services.

pub mod clients;
pub mod config;
pub mod constants;
pub mod dtos;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod validation;
