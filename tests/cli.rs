use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocketbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", dir.path())
        .env_remove("POCKETBOOK_LOG");
    cmd
}

/// Run a command and return the short ID printed after "Saved: "
fn saved_id(dir: &TempDir, args: &[&str]) -> String {
    let output = pocketbook(dir).args(args).output().unwrap();
    assert!(output.status.success(), "{:?} failed: {:?}", args, output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Saved: "))
        .map(str::to_string)
        .expect("no saved id in output")
}

fn english(dir: &TempDir) {
    pocketbook(dir)
        .args(["settings", "language", "en"])
        .assert()
        .success();
}

#[test]
fn test_add_and_list_transactions() {
    let dir = TempDir::new().unwrap();
    english(&dir);

    pocketbook(&dir)
        .args(["transaction", "add", "income", "100", "Salary", "-c", "salary", "-d", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved: txn-"));
    pocketbook(&dir)
        .args(["txn", "add", "expense", "30.50", "Groceries", "-c", "food", "-d", "2025-03-02"])
        .assert()
        .success();

    pocketbook(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Total (2): +69.50 ₼"));

    pocketbook(&dir)
        .args(["transaction", "list", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn test_invalid_input_reports_localized_failure() {
    let dir = TempDir::new().unwrap();

    pocketbook(&dir)
        .args(["transaction", "add", "expense", "abc", "Coffee", "-c", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Xəta baş verdi"));

    pocketbook(&dir)
        .args(["transaction", "add", "expense", "0", "Coffee", "-c", "food"])
        .assert()
        .failure();

    pocketbook(&dir)
        .args(["transaction", "add", "expense", "5", "Coffee", "-c", "salary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown expense category"));

    pocketbook(&dir)
        .args(["transaction", "add", "income", "2000000000000", "Lottery", "-c", "gift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot exceed"));
}

#[test]
fn test_delete_requires_force() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    let id = saved_id(&dir, &["transaction", "add", "expense", "12", "Taxi", "-c", "transport"]);

    pocketbook(&dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));
    pocketbook(&dir)
        .args(["transaction", "list"])
        .assert()
        .stdout(predicate::str::contains("Taxi"));

    pocketbook(&dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    pocketbook(&dir)
        .args(["transaction", "list"])
        .assert()
        .stdout(predicate::str::contains("No transactions yet"));
}

#[test]
fn test_goal_contribution_is_clamped() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    let id = saved_id(&dir, &["goal", "add", "Laptop", "1000", "--deadline", "2030-01-01"]);

    pocketbook(&dir)
        .args(["goal", "contribute", &id, "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains("Remaining: 0.00 ₼"));

    pocketbook(&dir)
        .args(["goal", "contribute", &id, "10"])
        .assert()
        .failure();
}

#[test]
fn test_debt_payment() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    let id = saved_id(
        &dir,
        &["debt", "add", "Loan", "200", "--creditor", "Bank", "--due", "2030-06-01"],
    );

    pocketbook(&dir)
        .args(["debt", "pay", &id, "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: 150.00 ₼"));

    pocketbook(&dir)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paid: 50.00 ₼"));
}

#[test]
fn test_clear_keeps_preferences() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    pocketbook(&dir)
        .args(["settings", "currency", "usd"])
        .assert()
        .success();
    pocketbook(&dir)
        .args(["transaction", "add", "income", "10", "Gift", "-c", "gift"])
        .assert()
        .success();

    pocketbook(&dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    pocketbook(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 0.00 $"))
        .stdout(predicate::str::contains("No transactions yet"));
}

#[test]
fn test_json_export_to_stdout() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["transaction", "add", "expense", "7", "Metro", "-c", "transport"])
        .assert()
        .success();

    let output = pocketbook(&dir).args(["export", "json"]).output().unwrap();
    assert!(output.status.success());
    let export: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(export["metadata"]["transactionCount"], 1);
    assert_eq!(export["transactions"][0]["description"], "Metro");
}

#[test]
fn test_audit_records_changes() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .args(["transaction", "add", "expense", "3", "Tea", "-c", "food"])
        .assert()
        .success();

    pocketbook(&dir)
        .args(["audit", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"));
}
