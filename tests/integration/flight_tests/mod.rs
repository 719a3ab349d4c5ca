mod config;
mod ground;
mod plugin;
