#![forbid(unsafe_code)]

mod client;
mod error;
mod response;
mod traits;
mod types;
mod validate;

pub use crate::{
    client::TinyUrlClient,
    error::{ShortenError, ShortenResult},
    traits::Shortener,
    types::{ClientOptions, ShortenRequest, ShortUrl},
};
