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

use crate::constants::{CURRENCY_PREFIX, I64_MAX_AS_F64, I64_MIN_AS_F64};
use crate::LineValue;
use std::fmt::{Display, Formatter};
use ulog_err::*;

impl LineValue {
	/// Infer the [`crate::LineValue`] of a raw number the way the level macros do.
	///
	/// The value is an amount if `origin` starts with `$`. Otherwise it is an integer when
	/// dividing it by its truncation gives exactly 1.0 (or it is 0.0), and fractional in every
	/// other case. The ratio test is kept as is, so very large magnitudes can be misjudged by
	/// floating point rounding.
	/// # Errors
	/// [`ulog_err::ErrKind::IllegalArgument`] - if `line` is NaN or infinite.
	///
	/// [`ulog_err::ErrKind::Overflow`] - if `line` is an integer outside the range of an
	/// [`prim@i64`].
	///```
	/// use ulog_log::LineValue;
	///
	/// assert_eq!(LineValue::classify(42.0, "foo.c").unwrap(), LineValue::Integer(42));
	/// assert_eq!(LineValue::classify(19.5, "$price").unwrap(), LineValue::Currency(19.5));
	/// assert_eq!(LineValue::classify(3.14, "foo.c").unwrap(), LineValue::Fractional(3.14));
	///```
	pub fn classify(line: f64, origin: &str) -> Result<Self, Error> {
		if !line.is_finite() {
			return Err(err!(
				ErrKind::IllegalArgument,
				"line value must be finite, found {}",
				line
			));
		}

		let is_currency = origin.starts_with(CURRENCY_PREFIX);
		let is_integer = !is_currency && (line / line.trunc() == 1.0 || line == 0.0);

		if is_integer {
			if line < I64_MIN_AS_F64 || line >= I64_MAX_AS_F64 {
				return Err(err!(
					ErrKind::Overflow,
					"line value {} does not fit in a 64 bit integer",
					line
				));
			}
			Ok(LineValue::Integer(line as i64))
		} else if is_currency {
			Ok(LineValue::Currency(line))
		} else {
			Ok(LineValue::Fractional(line))
		}
	}
}

impl From<i64> for LineValue {
	fn from(line: i64) -> Self {
		LineValue::Integer(line)
	}
}

impl From<u32> for LineValue {
	fn from(line: u32) -> Self {
		LineValue::Integer(line.into())
	}
}

impl Display for LineValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			LineValue::Integer(v) => write!(f, "{}", v),
			LineValue::Currency(v) => write!(f, "{:.2}", v),
			LineValue::Fractional(v) => write!(f, "{:.6}", v),
		}
	}
}
