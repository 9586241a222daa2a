use std::ffi::OsStr;
use std::path::PathBuf;

use predicates::prelude::*;
use tempfile::TempDir;

/// Returns the full path and the file name of a file in the temporary directory, the file is not created.
pub fn build_temp_file(temp_dir: &TempDir, prefix: &str, extension: &str) -> (PathBuf, PathBuf) {
    let mut path = PathBuf::from(temp_dir.path());

    let file_name = PathBuf::from(format!("{}.{}", prefix, extension));
    path.push(&file_name);

    (path, file_name)
}

/// Splits each `--flag value` string into separate arguments.
pub fn prepare_args(args: Vec<&str>) -> Vec<&OsStr> {
    args.iter()
        .flat_map(|arg| arg.split_once(' ').map_or(vec![*arg], |(flag, value)| vec![flag, value]))
        .map(OsStr::new)
        .collect()
}

/// A predicate that always passes, printing the output it was given under the label.
pub fn print(label: &str) -> impl Predicate<[u8]> + '_ {
    predicate::function(move |content: &str| {
        println!("{}:\n{}", label, content);
        true
    })
    .from_utf8()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_args_splits_flag_and_value() {
        // when
        let args = prepare_args(vec!["--trace trace.log", "-vvv", "brochure", "--recipe me-fone12"]);

        // then
        assert_eq!(args, vec!["--trace", "trace.log", "-vvv", "brochure", "--recipe", "me-fone12"]);
    }
}
