mod common;
mod engine;
mod lookup;
mod service;
