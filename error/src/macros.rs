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

/// Build the specified [`crate::ErrorKind`] and convert it into an [`crate::Error`]. The desired
/// [`crate::ErrorKind`] is specified using the [`crate::ErrKind`] name enum. Additional
/// parameters are formatted into the message as with [`std::format`].
///
/// Example:
///
///```
/// use ulog_err::{Error, ErrorKind, ErrKind, err};
///
/// fn show_err_kind(do_error: bool) -> Result<(), Error> {
///     let e = err!(ErrKind::Configuration, "invalid parameter name");
///
///     if do_error {
///         return Err(e);
///     }
///
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! err {
	($kind:expr, $msg:expr, $($param:tt)*) => {{
		let msg = &format!($msg, $($param)*)[..];
		$crate::err!($kind, msg)
	}};
	($kind:expr, $msg:expr) => {{
		use $crate::{ErrKind, Error, ErrorKind};
		let error: Error = match $kind {
			ErrKind::IO => ErrorKind::IO($msg.to_string()).into(),
			ErrKind::Log => ErrorKind::Log($msg.to_string()).into(),
			ErrKind::Utf8 => ErrorKind::Utf8($msg.to_string()).into(),
			ErrKind::Configuration => ErrorKind::Configuration($msg.to_string()).into(),
			ErrKind::Poison => ErrorKind::Poison($msg.to_string()).into(),
			ErrKind::CapacityExceeded => ErrorKind::CapacityExceeded($msg.to_string()).into(),
			ErrKind::IllegalArgument => ErrorKind::IllegalArgument($msg.to_string()).into(),
			ErrKind::Overflow => ErrorKind::Overflow($msg.to_string()).into(),
			ErrKind::Misc => ErrorKind::Misc($msg.to_string()).into(),
			ErrKind::Test => ErrorKind::Test($msg.to_string()).into(),
		};
		error
	}};
}

/// Map the specified error into the [`crate::ErrKind`] enum name from this crate.
/// Optionally specify an additional message to be included in the error.
///
/// Example:
///
///```
/// use ulog_err::{Error, ErrorKind, ErrKind, map_err};
/// use std::fs::File;
///
/// fn show_map_err() -> Result<(), Error> {
///     let file = map_err!(File::open("/path/to/something"), ErrKind::IO, "file open failed")?;
///     println!("file_type={:?}", file.metadata()?.file_type());
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! map_err {
	($in_err:expr, $kind:expr) => {{
		$crate::map_err!($in_err, $kind, "")
	}};
	($in_err:expr, $kind:expr, $msg:expr) => {{
		use $crate::{ErrKind, Error, ErrorKind};
		$in_err.map_err(|e| -> Error {
			match $kind {
				ErrKind::IO => ErrorKind::IO(format!("{}: {}", $msg, e)).into(),
				ErrKind::Log => ErrorKind::Log(format!("{}: {}", $msg, e)).into(),
				ErrKind::Utf8 => ErrorKind::Utf8(format!("{}: {}", $msg, e)).into(),
				ErrKind::Configuration => {
					ErrorKind::Configuration(format!("{}: {}", $msg, e)).into()
				}
				ErrKind::Poison => ErrorKind::Poison(format!("{}: {}", $msg, e)).into(),
				ErrKind::CapacityExceeded => {
					ErrorKind::CapacityExceeded(format!("{}: {}", $msg, e)).into()
				}
				ErrKind::IllegalArgument => {
					ErrorKind::IllegalArgument(format!("{}: {}", $msg, e)).into()
				}
				ErrKind::Overflow => ErrorKind::Overflow(format!("{}: {}", $msg, e)).into(),
				ErrKind::Misc => ErrorKind::Misc(format!("{}: {}", $msg, e)).into(),
				ErrKind::Test => ErrorKind::Test(format!("{}: {}", $msg, e)).into(),
			}
		})
	}};
}
