pub mod client;
pub mod coach;
pub mod hall;
pub mod training;

pub use client::Client;
pub use coach::Coach;
pub use hall::Hall;
pub use training::Training;
