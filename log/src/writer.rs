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

use crate::constants::NEWLINE;
use crate::StreamWriter;
use std::io::Write;
use ulog_err::*;

impl<'a> StreamWriter<'a> {
	/// Create a writer for `dest`.
	pub fn new(dest: &'a mut dyn Write) -> Self {
		Self { dest }
	}

	/// Write `line` followed by a newline in a single `write_all`, then flush. Returns the
	/// number of bytes written.
	/// # Errors
	/// [`ulog_err::ErrKind::IO`] - if the write or the flush fails. Nothing is retried.
	pub fn write_line(&mut self, line: &str) -> Result<usize, Error> {
		let mut buf = Vec::with_capacity(line.len() + NEWLINE.len());
		buf.extend_from_slice(line.as_bytes());
		buf.extend_from_slice(NEWLINE);
		map_err!(self.dest.write_all(&buf), ErrKind::IO, "write failed")?;
		map_err!(self.dest.flush(), ErrKind::IO, "flush failed")?;
		Ok(buf.len())
	}
}
