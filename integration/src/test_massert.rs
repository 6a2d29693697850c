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
	use ulog_err::*;
	use ulog_log::*;

	// set in the child process that is expected to abort
	#[cfg(debug_assertions)]
	const ABORT_CHILD_VAR: &str = "ULOG_INT_MASSERT_CHILD";

	fn workers() -> usize {
		3
	}

	#[cfg(debug_assertions)]
	#[test]
	fn test_massert_failure_aborts() -> Result<(), Error> {
		use std::env;
		use std::process::Command;

		if env::var(ABORT_CHILD_VAR).is_ok() {
			let expected = 5;
			massert!(workers() == expected, "need {} workers", expected);
			return Ok(());
		}

		// run only this test again in a child process, which must abort
		let output = Command::new(env::current_exe()?)
			.arg("test_massert::test::test_massert_failure_aborts")
			.arg("--exact")
			.arg("--nocapture")
			.arg("--test-threads=1")
			.env(ABORT_CHILD_VAR, "1")
			.output()?;

		assert!(!output.status.success());
		#[cfg(unix)]
		{
			use std::os::unix::process::ExitStatusExt;
			// SIGABRT
			assert_eq!(output.status.signal(), Some(6));
		}

		let stderr = String::from_utf8_lossy(&output.stderr);
		let assertion = stderr.find("Assertion failed: (workers() == expected)\n");
		assert!(assertion.is_some(), "stderr: {}", stderr);

		// the error record is only written when the error! wrapper is compiled in
		if cfg!(any(feature = "disable_error", feature = "disable_all")) {
			assert!(!stderr.contains("[ERROR]"));
			return Ok(());
		}
		let error = stderr.find("[ERROR]");
		assert!(error.is_some(), "stderr: {}", stderr);
		assert!(assertion < error);

		let record = &stderr[error.unwrap_or(0)..];
		assert!(record.contains("test_massert.rs:"));
		assert!(record.contains("test_massert_failure_aborts"));
		assert!(record.contains("need 5 workers"));
		Ok(())
	}

	#[test]
	fn test_massert_passing() -> Result<(), Error> {
		massert!(workers() == 3, "need {} workers", 3);
		massert!(workers() > 0);
		massert_some!(Some(workers()));
		Ok(())
	}

	// without debug assertions the condition is never evaluated
	#[cfg(not(debug_assertions))]
	#[test]
	fn test_massert_skipped() -> Result<(), Error> {
		fn evaluated() -> bool {
			panic!("massert condition was evaluated");
		}
		massert!(evaluated(), "not checked");
		massert_some!(None::<usize>);
		Ok(())
	}
}
