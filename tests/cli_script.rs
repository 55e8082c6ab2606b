use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gastos_cli").unwrap();
    cmd.env("GASTOS_CLI_SCRIPT", "1")
        .env("GASTOS_HOME", home.path())
        .env("GASTOS_USER", "tester")
        .env("GASTOS_NAME", "Tester");
    cmd
}

#[test]
fn script_mode_registers_and_summarizes() {
    let home = TempDir::new().unwrap();
    let input = "gasto 150 en Restaurante\nresumen\nsalir\n";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Gasto registrado"))
        .stdout(contains("Comida"))
        .stdout(contains("$150.00"))
        .stdout(contains("100.0%"));

    let json = std::fs::read_to_string(home.path().join("gastos.json")).unwrap();
    assert!(json.contains("\"tester\""));
    assert!(json.contains("\"Restaurante\""));
}

#[test]
fn script_mode_reports_empty_summary_as_guidance() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("resumen\n")
        .assert()
        .success()
        .stdout(contains("No tienes gastos registrados"));
}

#[test]
fn script_mode_purges_without_prompting() {
    let home = TempDir::new().unwrap();
    let input = "gasto 10 tacos\ngasto 20 cine\nlimpiar\nresumen\n";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Se eliminaron 2 gastos registrados."))
        .stdout(contains("No tienes gastos registrados"));
}

#[test]
fn script_mode_suggests_on_typos() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("resume\n")
        .assert()
        .success()
        .stderr(contains("¿Quisiste decir `resumen`?"));
}

#[test]
fn script_mode_rejects_non_numeric_amounts() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("gasto mucho en tacos\n")
        .assert()
        .success()
        .stderr(contains("Monto inválido"));
    assert!(!home.path().join("gastos.json").exists());
}
