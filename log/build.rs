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

use chrono::{DateTime, Local, TimeZone};
use std::env::var;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const CARGO_MANIFEST_ERROR: &str = "could not retrieve CARGO_PKG_VERSION env var";

// SOURCE_DATE_EPOCH pins the stamp for reproducible builds
fn build_time() -> DateTime<Local> {
	match var("SOURCE_DATE_EPOCH") {
		Ok(epoch) => match epoch.trim().parse::<i64>() {
			Ok(secs) => match Local.timestamp_opt(secs, 0).single() {
				Some(time) => time,
				None => Local::now(),
			},
			Err(_) => Local::now(),
		},
		Err(_) => Local::now(),
	}
}

fn main() {
	println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
	println!("cargo:rerun-if-changed=src");

	// create build file with needed info
	let mut build_file = PathBuf::new();
	build_file.push(Path::new(
		&var("OUT_DIR").expect("Build error: OUT_DIR not set"),
	));
	build_file.push("ulog_build.rs");

	let now = build_time();
	let pkg_version = var("CARGO_PKG_VERSION").expect(CARGO_MANIFEST_ERROR);

	// "Mmm dd yyyy" with a space padded day, and "hh:mm:ss"
	let build_text = format!(
		"/// Date this crate was built, formatted as `Mmm dd yyyy`.\n\
		 pub const BUILD_DATE: &str = \"{}\";\n\
		 /// Time this crate was built, formatted as `hh:mm:ss`.\n\
		 pub const BUILD_TIME: &str = \"{}\";\n\
		 /// Version of this crate.\n\
		 pub const PKG_VERSION: &str = \"{}\";\n",
		now.format("%b %e %Y"),
		now.format("%H:%M:%S"),
		pkg_version
	);

	let mut file = match File::create(build_file) {
		Ok(file) => file,
		Err(e) => panic!("Build Error: {}", e),
	};
	match file.write_all(build_text.as_bytes()) {
		Ok(_) => {}
		Err(e) => panic!("Build Error: {}", e),
	}
}
