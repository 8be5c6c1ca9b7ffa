pub mod cep;
pub mod models;
