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

use crate::{AttributeTable, Level, LineValue};
use std::fmt::Arguments;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LogConfig {
	pub(crate) colors: bool,
	pub(crate) runtime_timestamp: bool,
	pub(crate) max_line_len: usize,
	pub(crate) max_field_len: usize,
}

#[derive(Clone)]
pub(crate) struct LogImpl {
	pub(crate) config: LogConfig,
	pub(crate) attrs: AttributeTable,
}

// one call's worth of input
#[derive(Clone, Copy)]
pub(crate) struct LogRecord<'a> {
	pub(crate) level: &'a Level,
	pub(crate) origin: &'a str,
	pub(crate) function: &'a str,
	pub(crate) line: LineValue,
	pub(crate) message: Arguments<'a>,
}

pub(crate) struct LineFormatter<'a> {
	pub(crate) config: &'a LogConfig,
	pub(crate) attrs: &'a AttributeTable,
}

// fmt::Write sink that refuses to grow past `max` bytes
pub(crate) struct BoundedBuffer {
	pub(crate) buf: String,
	pub(crate) max: usize,
	pub(crate) overflow: bool,
}
