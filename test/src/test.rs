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

#[cfg(test)]
mod test {
	use crate::types::TestInfoImpl;
	use crate::{test_info, TestInfo};
	use std::fs::File;
	use std::io::Write;
	use std::path::{Path, PathBuf};
	use ulog_err::Error;

	#[test]
	fn test_test_info_macro() -> Result<(), Error> {
		let test_info = test_info!()?;
		assert!(test_info.directory().ends_with(".ulog"));
		assert!(test_info.directory().contains("test_test_info_macro"));
		assert!(Path::new(test_info.directory()).is_dir());
		Ok(())
	}

	#[test]
	fn test_directory_removed_on_drop() -> Result<(), Error> {
		let directory;
		{
			let test_info = test_info!()?;
			directory = test_info.directory().clone();
			let mut path = PathBuf::from(&directory);
			path.push("file.txt");
			let mut file = File::create(path)?;
			file.write_all(b"abc")?;
			assert!(Path::new(&directory).is_dir());
		}
		assert!(!Path::new(&directory).exists());
		Ok(())
	}

	#[test]
	fn test_preserve() -> Result<(), Error> {
		let directory;
		{
			let test_info = TestInfoImpl::new(true)?;
			directory = test_info.directory().clone();
		}
		assert!(Path::new(&directory).is_dir());
		std::fs::remove_dir_all(&directory)?;
		Ok(())
	}
}
