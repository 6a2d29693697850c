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

// These are local constants used in the logging crate

// build date, build time and package version generated by build.rs
include!(concat!(env!("OUT_DIR"), "/ulog_build.rs"));

// newline as byte array
pub(crate) const NEWLINE: &[u8] = &['\n' as u8];
// the default max length of a composed line
pub(crate) const DEFAULT_MAX_LINE_LEN: usize = 4_096;
// the default max length of the level label, origin file and function name
pub(crate) const DEFAULT_MAX_FIELD_LEN: usize = 1_024;
// an origin file starting with this character marks the line value as an amount
pub(crate) const CURRENCY_PREFIX: char = '$';
// start of every escape sequence emitted
pub(crate) const ESCAPE_PREFIX: &str = "\x1B[";
// line written to the error stream before a failed assertion is logged
pub(crate) const ASSERTION_FAILED_PREFIX: &str = "Assertion failed: (";

// i64 range expressed as f64 for the integer rendering of line values. The upper bound is
// exclusive because i64::MAX is not representable.
pub(crate) const I64_MIN_AS_F64: f64 = -9_223_372_036_854_775_808.0;
pub(crate) const I64_MAX_AS_F64: f64 = 9_223_372_036_854_775_808.0;

pub(crate) const BUG_LABEL: &str = "[BUG]";
pub(crate) const LOG_LABEL: &str = "[LOG]";
pub(crate) const ERROR_LABEL: &str = "[ERROR]";
pub(crate) const WARNING_LABEL: &str = "[WARNING]";

/// Number of attributes in an [`crate::AttributeTable`].
pub const ATTRIBUTE_COUNT: usize = 7;
