/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod posts;
pub mod transport;

pub use api::*;
pub use client::*;
pub use config::*;
pub use envelope::*;
pub use errors::*;
pub use posts::*;
pub use transport::*;
