mod config;
mod flight;
mod ground;
