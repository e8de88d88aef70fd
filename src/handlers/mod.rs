// handlers/mod.rs - Route handlers
//
// Every handler is stateless: it reads its collaborators from AppState,
// makes one collaborator call and answers with the shared JSON envelope.

pub mod auth;        // /api/auth/*
pub mod departments; // /api/departments
pub mod health;      // /health
pub mod seed;        // /api/seed/*

#[cfg(test)]
mod tests;
