extern crate libtest_mimic;

use std::error::Error;
use std::fmt::Write;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::{fs, io};

use libtest_mimic::{Arguments, Failed, Trial};
use yev_core::Parser;

const TEST_SIZE: usize = 440;

#[derive(Default)]
struct TestData {
    desc: String,
    input_yaml: PathBuf,
    is_error: bool,
    test_event: PathBuf,
}

fn perform_test(data: TestData, is_strict: bool) -> Result<(), Failed> {
    let input_yaml = fs::read_to_string(data.input_yaml)?;
    let mut actual_event = String::with_capacity(input_yaml.len());
    let mut is_error = false;
    for ev in Parser::new_from_str(&input_yaml) {
        match ev {
            Ok((ev, _)) => writeln!(actual_event, "{ev}")?,
            Err(_) => {
                is_error = true;
                break;
            }
        }
    }

    if is_strict || !is_error {
        let expected_event = adjusted_test_event(data.test_event)?;
        assert_eq!(actual_event, expected_event);
    } else {
        assert_eq!(is_error, data.is_error);
    }

    Ok(())
}

/// Checkouts that convert line endings give `test.event` CRLF breaks.
fn adjusted_test_event(path: PathBuf) -> io::Result<String> {
    Ok(fs::read_to_string(&path)?.replace("\r\n", "\n"))
}

fn collect_test_suite(
    path: &Path,
    ignore_list: &[&str],
    tests: &mut Vec<Trial>,
    is_strict: bool,
) -> Result<(), Box<dyn Error>> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        // suite data is checked out separately
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    for entry in entries {
        let entry = entry?;
        let file_type = entry.file_type()?;

        let test_dir_path = entry.path();
        let dir_name = entry.file_name().to_string_lossy().into_owned();
        if file_type.is_dir() && !ignore_list.contains(&dir_name.deref()) {
            collect_test(dir_name, &test_dir_path, ignore_list, tests, is_strict)?;
        }
    }
    Ok(())
}

fn collect_test(
    dir_name: String,
    test_dir_path: &Path,
    ignore_list: &[&str],
    tests: &mut Vec<Trial>,
    is_strict: bool,
) -> Result<(), Box<dyn Error>> {
    let mut test_data = TestData::default();
    let mut is_dir = false;
    for entry in fs::read_dir(test_dir_path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if file_type.is_dir() && !ignore_list.contains(&filename.deref()) {
            let dir_name = format!("{dir_name}/{filename}");
            collect_test(dir_name, &entry.path(), ignore_list, tests, is_strict)?;
            is_dir = true;
        } else {
            match &*filename {
                "===" => {
                    if let Ok(desc) = fs::read_to_string(entry.path()) {
                        test_data.desc = String::from(desc.trim());
                    }
                }
                "in.yaml" => test_data.input_yaml = entry.path(),
                "error" => test_data.is_error = true,
                "test.event" => test_data.test_event = entry.path(),
                _ => {}
            };
        }
    }
    if !is_dir {
        let test = Trial::test(format!("{} ({})", dir_name, &test_data.desc), move || {
            perform_test(test_data, is_strict)
        });
        tests.push(test);
    }

    Ok(())
}

fn collect_tests(
    path: &Path,
    filter_list: &[&str],
    is_strict: bool,
) -> Result<Vec<Trial>, Box<dyn Error>> {
    let mut tests = Vec::with_capacity(TEST_SIZE);
    collect_test_suite(path, filter_list, &mut tests, is_strict)?;
    Ok(tests)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let filter_list = [".git", "name", "tags"];

    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("yaml-test-suite");

    let tests = collect_tests(&path, &filter_list, false)?;

    libtest_mimic::run(&args, tests).exit();
}
