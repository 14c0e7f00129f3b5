// Infrastructure layer module
// Contains the database adapters

pub mod repositories;
