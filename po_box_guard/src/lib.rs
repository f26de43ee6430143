pub mod prelude;

mod address;
mod admin;
mod checkout;
mod errors;
mod hooks;
mod rules;
mod settings;
mod store;
