use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use tempfile::TempDir;

fn surat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("surat").unwrap();
    cmd.current_dir(dir.path()).arg("--dir").arg(dir.path());
    cmd
}

fn register(dir: &TempDir, tag: &str, number: &str, subject: &str) {
    surat(dir)
        .args([
            "register",
            tag,
            "--number",
            number,
            "--counterpart",
            "Dinas Pendidikan",
            "--subject",
            subject,
        ])
        .assert()
        .success();
}

#[test]
fn init_creates_the_register_documents() {
    let dir = TempDir::new().unwrap();

    surat(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));

    for doc in ["counters.json", "surat_masuk.json", "surat_keluar.json"] {
        assert!(dir.path().join(doc).exists(), "missing {}", doc);
    }
}

#[test]
fn registered_letters_show_up_in_the_listing() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "005/DISDIK/2024", "Undangan rapat");

    surat(&dir)
        .args(["list", "masuk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("005/DISDIK/2024"))
        .stdout(predicate::str::contains("Undangan rapat"));
}

#[test]
fn duplicate_numbers_are_rejected() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "005/DISDIK/2024", "First");

    surat(&dir)
        .args([
            "register",
            "masuk",
            "--number",
            "005/DISDIK/2024",
            "--counterpart",
            "Kantor Pos",
            "--subject",
            "Second",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already registered"));

    // The register still holds only the first letter
    surat(&dir)
        .args(["list", "masuk"])
        .assert()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Second").not());
}

#[test]
fn omitting_the_number_generates_one() {
    let dir = TempDir::new().unwrap();

    surat(&dir)
        .args([
            "register",
            "keluar",
            "--counterpart",
            "Dinas Kesehatan",
            "--subject",
            "Pemberitahuan",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ARSIP-OUT-"));

    surat(&dir)
        .args(["list", "keluar"])
        .assert()
        .stdout(predicate::str::contains("ARSIP-OUT-"));
}

#[test]
fn search_filters_the_listing() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "A-001", "Undangan rapat");
    register(&dir, "masuk", "A-002", "Tagihan listrik");

    surat(&dir)
        .args(["list", "masuk", "--search", "tagihan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A-002"))
        .stdout(predicate::str::contains("A-001").not());
}

#[test]
fn view_shows_the_full_letter() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "A-001", "Undangan rapat");

    surat(&dir)
        .args(["view", "masuk", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinas Pendidikan"))
        .stdout(predicate::str::contains("Undangan rapat"));
}

#[test]
fn delete_removes_the_addressed_row() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "A-001", "First");
    register(&dir, "masuk", "A-002", "Second");

    surat(&dir)
        .args(["delete", "masuk", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A-001"));

    surat(&dir)
        .args(["list", "masuk"])
        .assert()
        .stdout(predicate::str::contains("A-002"))
        .stdout(predicate::str::contains("A-001").not());
}

#[test]
fn delete_past_the_end_fails_visibly() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "A-001", "Only");

    surat(&dir)
        .args(["delete", "masuk", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn export_writes_a_dated_spreadsheet() {
    let dir = TempDir::new().unwrap();
    register(&dir, "masuk", "A-001", "Undangan rapat");

    surat(&dir).args(["export", "masuk"]).assert().success();

    let filename = format!(
        "Data_Surat_Masuk_{}.csv",
        Utc::now().date_naive().format("%Y-%m-%d")
    );
    let sheet = std::fs::read_to_string(dir.path().join(filename)).unwrap();
    assert!(sheet.starts_with("No,Number,Date,Sender,Subject,Notes"));
    assert!(sheet.contains("1,A-001,"));
}

#[test]
fn exporting_an_empty_register_writes_nothing() {
    let dir = TempDir::new().unwrap();

    surat(&dir)
        .args(["export", "keluar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No letters to export"));
}

#[test]
fn config_prefix_round_trips_and_drives_generation() {
    let dir = TempDir::new().unwrap();

    surat(&dir)
        .args(["config", "number-prefix", "DISDIK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("number-prefix = DISDIK"));

    surat(&dir)
        .args([
            "register",
            "masuk",
            "--counterpart",
            "X",
            "--subject",
            "S",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DISDIK-IN-"));
}

#[test]
fn unknown_register_name_is_an_error() {
    let dir = TempDir::new().unwrap();

    surat(&dir)
        .args(["list", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown register"));
}
