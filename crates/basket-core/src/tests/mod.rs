mod models;
mod validation;
