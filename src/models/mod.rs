//! Resource, request and response shapes of the database service.

mod autonomous_database;
mod backup;
mod common;
mod connection_credentials;
mod database;
mod db_home;
mod db_system;
mod maintenance_window;
mod patch;
mod vm_network;

pub use autonomous_database::*;
pub use backup::*;
pub use common::*;
pub use connection_credentials::*;
pub use database::*;
pub use db_home::*;
pub use db_system::*;
pub use maintenance_window::*;
pub use patch::*;
pub use vm_network::*;
