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

//! Utilities used by the tests in the other ulog crates. [`crate::test_info`] returns a
//! [`crate::TestInfo`] whose scratch directory is named after the calling test and removed when
//! the value is dropped.

mod impls;
mod macros;
mod test;
mod types;

pub use crate::types::{TestBuilder, TestInfo};
