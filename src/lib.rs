// Re-export core modules
pub mod config;
pub mod db;
pub mod models;
pub mod utils;

pub use config::{ Config, PostgresConfig };
pub use db::{ Database, DbConfig, DbContext, RepositoryError, RepositoryFields, Repositories };

pub use db::repositories::{
    ClientRepository,
    CoachRepository,
    HallRepository,
    TrainingRepository,
    PgClientRepository,
    PgCoachRepository,
    PgHallRepository,
    PgTrainingRepository,
};
pub use models::{ Client, Coach, Hall, Training };
