#[macro_use]
extern crate util;

pub mod common;

mod presets {
    use assert_cmd::Command;
    use indoc::indoc;
    use util::test::{prepare_args, print};

    use crate::common::{BIRD_SUNG_T8_BROCHURE, BIRD_SUNG_T8_REPORT, ME_FONE12_BROCHURE, ME_FONE12_REPORT};

    #[test]
    fn list_recipes() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // and
        let expected_output = indoc! {"
            me-fone12
            bird-sung-t8
        "};

        // when
        cmd.args(prepare_args(vec!["recipes"]))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(expected_output);
    }

    #[test]
    fn me_fone12_brochure() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["brochure", "--recipe me-fone12"]))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(ME_FONE12_BROCHURE);
    }

    #[test]
    fn bird_sung_t8_brochure() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["brochure", "--recipe bird-sung-t8"]))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(BIRD_SUNG_T8_BROCHURE);
    }

    #[test]
    fn me_fone12_report() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["report", "--recipe me-fone12"]))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(ME_FONE12_REPORT);
    }

    #[test]
    fn bird_sung_t8_report() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["report", "--recipe bird-sung-t8"]))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(BIRD_SUNG_T8_REPORT);
    }

    #[test]
    fn unknown_recipe() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["brochure", "--recipe me-fone13"]))
            // then
            .assert()
            .failure()
            .stderr(predicates::str::contains("invalid value 'me-fone13'"));
    }

    #[test]
    fn recipe_is_required() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["report"]))
            // then
            .assert()
            .failure()
            .stdout("");
    }
}

mod recipe_files {
    use std::fs::{read_to_string, write};

    use assert_cmd::Command;
    use indoc::indoc;
    use tempfile::tempdir;
    use util::test::{build_temp_file, prepare_args, print};

    use crate::common::{BIRD_SUNG_T8_REPORT, ME_FONE12_BROCHURE};

    #[test]
    fn export_then_report_from_file() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;
        let (recipe_path, _recipe_file_name) = build_temp_file(&temp_dir, "bird-sung-t8", "json");
        let recipe_path_arg = recipe_path.to_string_lossy().to_string();

        // and
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));
        cmd.args(prepare_args(vec!["export-recipe", "--recipe bird-sung-t8"]))
            .arg("--output")
            .arg(&recipe_path_arg)
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout("");

        // and
        let recipe_content = read_to_string(&recipe_path)?;
        println!("{}", recipe_content);
        assert_contains_inorder!(recipe_content, [
            "\"manufacturer\": \"Birdsung\"",
            "\"model\": \"T8\"",
            "\"height_mm\": \"154.0\"",
            "\"is_dust_sand_proof\": true",
        ]);

        // when
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));
        cmd.args(prepare_args(vec!["report"]))
            .arg("--recipe-file")
            .arg(&recipe_path_arg)
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(BIRD_SUNG_T8_REPORT);

        Ok(())
    }

    #[test]
    fn incomplete_recipe_file() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;
        let (recipe_path, _recipe_file_name) = build_temp_file(&temp_dir, "recipe", "json");
        write(&recipe_path, indoc! {r#"
            {
                "manufacturer": "NBD",
                "model": "MeFone0",
                "battery": {
                    "form_factor": "M-004",
                    "battery_type": "NiCAD",
                    "storage_capacity": "8"
                }
            }
        "#})?;

        // when
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));
        cmd.args(prepare_args(vec!["brochure"]))
            .arg("--recipe-file")
            .arg(recipe_path.to_string_lossy().to_string())
            // then
            .assert()
            .failure()
            .stdout("")
            .stderr(predicates::str::contains("Missing part. kind: circuit_board"));

        Ok(())
    }

    #[test]
    fn missing_recipe_file() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;
        let (recipe_path, _recipe_file_name) = build_temp_file(&temp_dir, "missing", "json");

        // when
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));
        cmd.args(prepare_args(vec!["brochure"]))
            .arg("--recipe-file")
            .arg(recipe_path.to_string_lossy().to_string())
            // then
            .assert()
            .failure()
            .stderr(predicates::str::contains("Path does not exist."));

        Ok(())
    }

    #[test]
    fn arguments_from_file() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;
        let (args_path, _args_file_name) = build_temp_file(&temp_dir, "args", "txt");
        write(&args_path, indoc! {"
            brochure
            --recipe
            me-fone12
        "})?;

        // when
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));
        cmd.arg(format!("@{}", args_path.to_string_lossy()))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(ME_FONE12_BROCHURE);

        Ok(())
    }
}

mod trace_logging {
    use std::fs::read_to_string;

    use assert_cmd::Command;
    use tempfile::tempdir;
    use util::test::{build_temp_file, prepare_args, print};

    use crate::common::ME_FONE12_REPORT;

    #[test]
    fn trace_log() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;
        let (trace_log_path, _trace_log_file_name) = build_temp_file(&temp_dir, "trace", "log");

        // when
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));
        cmd.arg("--trace")
            .arg(trace_log_path.to_string_lossy().to_string())
            .args(prepare_args(vec!["-vvv", "report", "--recipe me-fone12"]))
            // then
            .assert()
            .success()
            .stderr(print("stderr"))
            .stdout(ME_FONE12_REPORT);

        // and
        let trace_content: String = read_to_string(trace_log_path)?;
        println!("{}", trace_content);

        assert_contains_inorder!(trace_content, [
            "Using preset recipe. recipe: me-fone12",
            "Assembled phone. manufacturer: 'NBD', model: 'MeFone12'",
        ]);

        Ok(())
    }

    #[test]
    fn quiet_keeps_stderr_empty() {
        // given
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_handset_cli"));

        // when
        cmd.args(prepare_args(vec!["-q", "brochure", "--recipe me-fone12"]))
            // then
            .assert()
            .success()
            .stderr("");
    }
}
