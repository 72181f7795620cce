//! Core infrastructure shared by the generators and the orchestrator

pub mod time;
