// Service layer implementations
// This module contains the business logic for member and note operations

pub mod member;
pub mod note;
