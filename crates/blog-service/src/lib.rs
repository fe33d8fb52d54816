//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.
//! The reaction toggle engine lives in [`services::reaction`].

pub mod dto;
pub mod services;

pub use services::{
    AuthService, PostService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
