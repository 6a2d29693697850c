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

/// Returns a `Result<impl TestInfo, Error>` for the calling test. Pass `true` to keep the
/// directory after the test completes.
#[macro_export]
macro_rules! test_info {
	() => {{
		$crate::test_info!(false)
	}};
	($preserve:expr) => {{
		use $crate::TestBuilder;
		TestBuilder::build_test_info($preserve)
	}};
}
