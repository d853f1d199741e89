pub mod movie_service;

pub use movie_service::{CreatedMovie, MovieError, MovieService};
