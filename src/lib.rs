// Core game logic modules
pub mod core;

// Error types
pub mod error;

// Word sources (predefined, AI, custom lists)
pub mod words;

// Saved game configuration
pub mod storage;

// Environment settings
pub mod settings;

// Middleware
pub mod middleware;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
