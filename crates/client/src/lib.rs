mod client;
mod error;

pub use self::{
    client::{Client, HelloApi},
    error::{Error, Result},
};
