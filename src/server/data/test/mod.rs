mod crud;
mod data_source;
mod search;
mod species;
mod station;
mod user;
