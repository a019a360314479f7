pub mod config;

pub mod rest;

pub mod openapi;

pub mod telemetry;

pub mod health;

// Court application proceedings engine
pub mod proceedings;
