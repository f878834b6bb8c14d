mod error;
mod pages;
mod profile;
mod startup;
