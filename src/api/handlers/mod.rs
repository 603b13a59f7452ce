//! HTTP request handlers

pub mod crud;
pub mod genres;
pub mod health;
pub mod movies;
