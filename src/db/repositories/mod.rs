mod client;
mod coach;
mod hall;
mod training;

pub use client::{ ClientRepository, PgClientRepository };
pub use coach::{ CoachRepository, PgCoachRepository };
pub use hall::{ HallRepository, PgHallRepository };
pub use training::{ PgTrainingRepository, TrainingRepository };

#[cfg(test)]
pub use client::MockClientRepository;
#[cfg(test)]
pub use coach::MockCoachRepository;
#[cfg(test)]
pub use hall::MockHallRepository;
#[cfg(test)]
pub use training::MockTrainingRepository;
