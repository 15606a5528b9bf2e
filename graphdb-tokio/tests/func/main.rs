mod mock;

mod admin;
mod query;
