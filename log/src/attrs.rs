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

use crate::constants::ATTRIBUTE_COUNT;
use crate::{Attribute, AttributeTable};
use std::convert::TryFrom;
use ulog_err::*;

impl Attribute {
	/// All attributes, in the order their fields appear in a line.
	pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
		Attribute::Date,
		Attribute::Time,
		Attribute::Level,
		Attribute::FileName,
		Attribute::Line,
		Attribute::Function,
		Attribute::Message,
	];

	/// Position of this attribute in an [`crate::AttributeTable`].
	pub fn index(&self) -> usize {
		*self as usize
	}
}

impl TryFrom<usize> for Attribute {
	type Error = Error;

	fn try_from(index: usize) -> Result<Self, Error> {
		match Attribute::ALL.get(index) {
			Some(attr) => Ok(*attr),
			None => Err(err!(
				ErrKind::IllegalArgument,
				"attribute index {} is out of range (0..{})",
				index,
				ATTRIBUTE_COUNT
			)),
		}
	}
}

impl AttributeTable {
	/// Flip the disabled flag of `attr`.
	pub fn toggle(&mut self, attr: Attribute) {
		let i = attr.index();
		self.disabled[i] = !self.disabled[i];
	}

	pub fn is_disabled(&self, attr: Attribute) -> bool {
		self.disabled[attr.index()]
	}

	pub fn is_visible(&self, attr: Attribute) -> bool {
		!self.is_disabled(attr)
	}

	/// Make every attribute visible.
	pub fn reset(&mut self) {
		self.disabled = [false; ATTRIBUTE_COUNT];
	}
}
