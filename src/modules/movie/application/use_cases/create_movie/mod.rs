mod command;
mod handler;
mod result;

pub use command::CreateMovieCommand;
pub use handler::CreateMovieHandler;
pub use result::CreateMovieResult;
