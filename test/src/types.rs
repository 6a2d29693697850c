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

use ulog_err::Error;

/// Information for a single test.
pub trait TestInfo {
	/// Return a directory that can be used by the test. It is automatically deleted when the
	/// [`crate::TestInfo`] goes out of scope unless it was created with `preserve` set.
	fn directory(&self) -> &String;
}

/// Builder for [`crate::TestInfo`] implementations.
pub struct TestBuilder {}

impl TestBuilder {
	/// Build a [`crate::TestInfo`]. If `preserve` is true, the directory is not deleted on drop.
	pub fn build_test_info(preserve: bool) -> Result<impl TestInfo, Error> {
		TestInfoImpl::new(preserve)
	}
}

pub(crate) struct TestInfoImpl {
	pub(crate) directory: String,
	pub(crate) preserve: bool,
}
