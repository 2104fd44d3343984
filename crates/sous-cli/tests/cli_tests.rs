use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASTA: &str = "토마토 파스타 레시피를 알려드릴게요!

재료:
- 파스타면 200g
- 토마토 소스 1컵

Step 1: 끓는 물에 면을 10분 삶아주세요.
Step 2: 소스를 넣고 3분 볶아주세요.
";

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary directory"),
        }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    /// `sous --no-color` pointed at this environment's cookbook and settings.
    fn sous(&self) -> Command {
        let mut cmd = Command::cargo_bin("sous").expect("Failed to find sous binary");
        cmd.args([
            "--no-color",
            "--database-file",
            &self.path("cookbook.db"),
            "--settings-file",
            &self.path("settings.json"),
        ]);
        cmd
    }

    fn write(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        std::fs::write(Path::new(&path), contents).expect("Failed to write input file");
        path
    }

    fn save_pasta(&self) -> String {
        let output = self
            .sous()
            .arg("save")
            .write_stdin(PASTA)
            .output()
            .expect("Failed to run sous save");
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
        stdout
            .lines()
            .find_map(|line| line.strip_prefix("Saved recipe with ID: "))
            .expect("saved id in output")
            .trim()
            .to_string()
    }
}

#[test]
fn test_check_recognizes_recipes() {
    let env = TestEnv::new();

    env.sous()
        .arg("check")
        .write_stdin(PASTA)
        .assert()
        .success()
        .stdout("Looks like a recipe.\n");

    env.sous()
        .arg("check")
        .write_stdin("오늘 날씨가 참 좋네요.")
        .assert()
        .success()
        .stdout("Not a recipe.\n");
}

#[test]
fn test_extract_renders_recipe_card() {
    let env = TestEnv::new();
    let file = env.write("answer.txt", PASTA);

    env.sous()
        .args(["extract", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 토마토 파스타"))
        .stdout(predicate::str::contains("- 파스타면 200g"))
        .stdout(predicate::str::contains("1. 끓는 물에 면을 10분 삶아주세요. ⏱ 10분"))
        .stdout(predicate::str::contains("Cooking time: 13분"))
        .stdout(predicate::str::contains("Steps from: formal_markers"));
}

#[test]
fn test_extract_json() {
    let env = TestEnv::new();

    let output = env
        .sous()
        .args(["extract", "--json"])
        .write_stdin(PASTA)
        .output()
        .expect("Failed to run sous extract");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(json["title"], "토마토 파스타");
    assert_eq!(json["cookingTimeMinutes"], 13);
    assert_eq!(json["steps"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_extract_falls_back_to_raw_text() {
    let env = TestEnv::new();
    let chat = "안녕하세요! 무엇을 도와드릴까요?";

    env.sous()
        .arg("extract")
        .write_stdin(chat)
        .assert()
        .success()
        .stdout(chat);
}

#[test]
fn test_list_empty_cookbook() {
    let env = TestEnv::new();

    env.sous()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_save_list_show_delete() {
    let env = TestEnv::new();
    let id = env.save_pasta();

    env.sous()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("토마토 파스타 (ID: {id})")));

    env.sous()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 조리 순서"))
        .stdout(predicate::str::contains("Not cooked yet."));

    env.sous()
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe '토마토 파스타'"));

    env.sous()
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_save_rejects_non_recipe() {
    let env = TestEnv::new();

    env.sous()
        .arg("save")
        .write_stdin("그냥 잡담입니다.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("recipe could not be loaded"));
}

#[test]
fn test_cook_walks_through_steps() {
    let env = TestEnv::new();
    let file = env.write("answer.txt", PASTA);

    env.sous()
        .args(["cook", &file])
        .write_stdin("n\n다시\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("토마토 파스타 요리를 시작합니다."))
        .stdout(predicate::str::contains("**Step 1/2** · ▶ Running 10:00"))
        .stdout(predicate::str::contains("🔊 2단계. 소스를 넣고 3분 볶아주세요."))
        .stdout(predicate::str::contains("토마토 파스타 완성! 맛있게 드세요."));
}

#[test]
fn test_cook_saved_recipe_records_rating() {
    let env = TestEnv::new();
    let id = env.save_pasta();

    env.sous()
        .args(["cook", "--saved", &id])
        .write_stdin("c 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cooking history updated"));

    env.sous()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cooked**: 1 times, rated 5.0/5"));
}

#[test]
fn test_cook_recipe_without_steps_cannot_be_loaded() {
    let env = TestEnv::new();
    let file = env.write("empty.json", r#"{"title":"빈 레시피","steps":[]}"#);

    env.sous()
        .args(["cook", "--json", &file])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: recipe could not be loaded"));
}

#[test]
fn test_settings_round_trip() {
    let env = TestEnv::new();

    env.sous()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto read**: true"))
        .stdout(predicate::str::contains("Auto start timer**: true"));

    env.sous()
        .args(["settings", "--auto-read", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Settings saved"));

    env.sous()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto read**: false"));
}

#[test]
fn test_quiet_cook_uses_saved_settings() {
    let env = TestEnv::new();
    let file = env.write("answer.txt", PASTA);
    env.write(
        "settings.json",
        r#"{"auto_read": false, "auto_start_timer": false}"#,
    );

    env.sous()
        .args(["cook", &file])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🔊").not())
        .stdout(predicate::str::contains("○ Idle 10:00"));
}

#[test]
fn test_cook_quiet_flag_silences_speaker() {
    let env = TestEnv::new();
    let file = env.write("answer.txt", PASTA);

    env.sous()
        .args(["cook", "--quiet", &file])
        .write_stdin("n\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🔊").not())
        .stdout(predicate::str::contains("**Step 2/2**"));
}

#[test]
fn test_cook_requires_a_recipe_source() {
    let env = TestEnv::new();

    env.sous()
        .arg("cook")
        .write_stdin(PASTA)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--saved"));

    env.sous()
        .args(["cook", "-"])
        .write_stdin(PASTA)
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass a recipe file or --saved"));
}
