mod errors;
mod queries;
mod typed;
