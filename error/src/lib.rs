// Copyright (c) 2024, The ulog Developers
// Some code and concepts from:
// * BitcoinMW: https://github.com/bitcoinmw/bitcoinmw
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error crate used by the other crates in ulog. All fallible functions return the
//! [`crate::Error`] type defined here. The kind of error that occurred can be obtained with
//! [`crate::Error::kind`], and errors are built with the [`crate::err`] and [`crate::map_err`]
//! macros using the [`crate::ErrKind`] name enum.
//!
//! # Examples
//!
//!```
//! use ulog_err::*;
//!
//! fn check_len(s: &str, max: usize) -> Result<(), Error> {
//!     if s.len() > max {
//!         return Err(err!(ErrKind::CapacityExceeded, "{} > {}", s.len(), max));
//!     }
//!     Ok(())
//! }
//!
//! fn main() -> Result<(), Error> {
//!     check_len("abc", 10)?;
//!     let e = check_len("abcdef", 3).unwrap_err();
//!     assert!(matches!(e.kind(), ErrorKind::CapacityExceeded(_)));
//!     Ok(())
//! }
//!```

mod error;
mod macros;
mod types;

pub use crate::types::{ErrKind, Error, ErrorKind};
